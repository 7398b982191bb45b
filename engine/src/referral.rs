// 推荐树投影
//
// 服务端下发的是扁平的被推荐人列表（带直接上级 id），
// 这里按距离当前用户的层数切成三级视图。展示层只做计数。
use common::models::{Referral, ReferralTree};
use common::utils::relation::group_levels;

/// 推荐树最多展示的层数
pub const MAX_REFERRAL_DEPTH: usize = 3;

/// 把扁平推荐列表投影成三级推荐树
///
/// `root_id` 是当前用户的 id；一级是自己直接邀请的人，以此类推。
/// 超过三级的下线不参与展示，也不计入 total_referrals。
pub fn build_tree(root_id: &str, referrals: Vec<Referral>) -> ReferralTree {
    let mut levels = group_levels(referrals, root_id.to_string(), MAX_REFERRAL_DEPTH);

    // group_levels 保证返回 MAX_REFERRAL_DEPTH 个桶
    let level3 = levels.pop().unwrap_or_default();
    let level2 = levels.pop().unwrap_or_default();
    let level1 = levels.pop().unwrap_or_default();

    let mut tree = ReferralTree {
        level1,
        level2,
        level3,
        total_referrals: 0,
    };
    tree.recount();
    tree
}

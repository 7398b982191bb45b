use std::collections::HashMap;
use std::hash::Hash;

/// 层级关系节点
///
/// 任何携带「自身 id + 直接上级 id」的扁平记录都可以实现该 trait，
/// 然后用 [`group_levels`] 按距根节点的层数分组（推荐树按 1/2/3 级展示）。
pub trait RelationNode: Clone {
    /// 节点 id 类型（需要可比较、可哈希）
    type Id: Eq + Hash + Clone;

    /// 节点自身 id
    fn node_id(&self) -> Self::Id;

    /// 直接上级 id（根节点的直属下级指向根）
    fn parent_id(&self) -> Option<Self::Id>;
}

/// 把扁平的上下级列表按层分组
///
/// # 参数
/// * `nodes` - 扁平节点列表
/// * `root_id` - 根节点 id（不出现在结果中）
/// * `max_depth` - 最多展开的层数
///
/// # 返回
/// `result[0]` 是根的直属下级，`result[1]` 是下级的下级，依此类推。
/// 超出 `max_depth` 的节点、以及上级缺失的孤儿节点会被丢弃。
pub fn group_levels<T: RelationNode>(
    nodes: Vec<T>,
    root_id: T::Id,
    max_depth: usize,
) -> Vec<Vec<T>> {
    let mut levels: Vec<Vec<T>> = vec![Vec::new(); max_depth];
    if nodes.is_empty() || max_depth == 0 {
        return levels;
    }

    // 按上级 id 分组
    let mut children_by_parent: HashMap<T::Id, Vec<T>> = HashMap::new();
    for node in nodes {
        if let Some(parent_id) = node.parent_id() {
            children_by_parent.entry(parent_id).or_default().push(node);
        }
    }

    // 从根开始逐层展开
    let mut frontier: Vec<T::Id> = vec![root_id];
    for level in levels.iter_mut() {
        let mut next_frontier = Vec::new();
        for parent in frontier {
            if let Some(children) = children_by_parent.remove(&parent) {
                for child in children {
                    next_frontier.push(child.node_id());
                    level.push(child);
                }
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestNode {
        id: i64,
        parent_id: Option<i64>,
    }

    impl RelationNode for TestNode {
        type Id = i64;

        fn node_id(&self) -> Self::Id {
            self.id
        }

        fn parent_id(&self) -> Option<Self::Id> {
            self.parent_id
        }
    }

    fn node(id: i64, parent_id: i64) -> TestNode {
        TestNode {
            id,
            parent_id: Some(parent_id),
        }
    }

    #[test]
    fn test_group_levels_simple() {
        let nodes = vec![node(1, 0), node(2, 1), node(3, 1), node(4, 2)];

        let levels = group_levels(nodes, 0, 3);

        assert_eq!(levels[0].len(), 1);
        assert_eq!(levels[0][0].id, 1);
        assert_eq!(levels[1].len(), 2);
        assert_eq!(levels[2].len(), 1);
        assert_eq!(levels[2][0].id, 4);
    }

    #[test]
    fn test_group_levels_depth_cutoff() {
        // 第 4 层 (id=5) 超出 max_depth=3，应被丢弃
        let nodes = vec![node(1, 0), node(2, 1), node(3, 2), node(5, 3)];

        let levels = group_levels(nodes, 0, 3);

        assert_eq!(levels.len(), 3);
        assert_eq!(levels[2].len(), 1);
        assert_eq!(levels[2][0].id, 3);
        let total: usize = levels.iter().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_group_levels_orphans_dropped() {
        // id=9 的上级不在列表里，也不是根，属于孤儿
        let nodes = vec![node(1, 0), node(9, 42)];

        let levels = group_levels(nodes, 0, 3);

        let total: usize = levels.iter().map(Vec::len).sum();
        assert_eq!(total, 1);
        assert_eq!(levels[0][0].id, 1);
    }

    #[test]
    fn test_group_levels_empty() {
        let levels = group_levels(Vec::<TestNode>::new(), 0, 3);
        assert!(levels.iter().all(Vec::is_empty));
    }
}

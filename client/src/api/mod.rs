// 按业务域划分的接口封装
// /user/* 与认证 → user.rs
// /withdrawal/* → withdrawal.rs
// /admin/* 及后台动作 → admin.rs
pub mod admin;
pub mod user;
pub mod withdrawal;

pub mod logs;
pub mod subscription;

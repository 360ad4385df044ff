//! 服务层
//!
//! 承载跨数据层的业务流程，目前只有导入/导出服务。

pub mod transfer;

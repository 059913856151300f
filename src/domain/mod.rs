// ==========================================
// 货运跟踪系统 - 领域模型层
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 3 节
// ==========================================
// 职责: 定义路线/航程/地点等领域实体与值对象
// 红线: 不含数据访问逻辑, 不含派生逻辑
// ==========================================

pub mod error;
pub mod itinerary;
pub mod location;
pub mod route;
pub mod types;

// 重导出核心类型
pub use error::{DomainError, DomainResult};
pub use itinerary::{Itinerary, Leg};
pub use location::{Location, UnLocode};
pub use route::RouteSpecification;
pub use types::{HandlingEventType, RoutingStatus};

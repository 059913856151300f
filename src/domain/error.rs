// ==========================================
// 货运跟踪系统 - 领域错误类型
// ==========================================
// 职责: 定义领域值对象构造失败的错误类型
// 说明: 航程计划/搬运事件的"缺失"不是错误, 用 Option 表达
// ==========================================

use thiserror::Error;

/// 领域错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 联合国地点代码格式非法 (要求 3-5 位大写字母或数字)
    #[error("非法的地点代码: {0}")]
    InvalidLocationCode(String),

    /// 航程计划必须至少包含一个航程段
    #[error("航程计划不能为空")]
    EmptyItinerary,
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidLocationCode("hk".to_string());
        assert!(err.to_string().contains("hk"));

        let err = DomainError::EmptyItinerary;
        assert!(err.to_string().contains("航程计划"));
    }
}

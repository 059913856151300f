// ==========================================
// 货运跟踪系统 - 地点值对象
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 3 节
// 职责: 定义联合国地点代码与地点值对象
// 红线: 地点相等性只看代码, 不看名称
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ==========================================
// 联合国地点代码 (UN/LOCODE)
// ==========================================

/// 联合国地点代码 (UnLocode)
///
/// 3-5 位大写字母或数字, 如 HKG / DAL / USDAL。
/// 构造时校验格式, 构造后不可变。
// 反序列化走 TryFrom, 保证格式不变式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct UnLocode(String);

impl UnLocode {
    /// 创建新的地点代码 (校验格式)
    pub fn new(code: String) -> DomainResult<Self> {
        let valid = (3..=5).contains(&code.len())
            && code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if valid {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidLocationCode(code))
        }
    }

    /// 获取代码字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UnLocode> for String {
    fn from(code: UnLocode) -> Self {
        code.0
    }
}

impl TryFrom<String> for UnLocode {
    type Error = DomainError;

    fn try_from(code: String) -> DomainResult<Self> {
        UnLocode::new(code)
    }
}

impl fmt::Display for UnLocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 地点 (Location)
// ==========================================

/// 地点 (Location)
///
/// 由地点代码唯一标识; 两个地点相等当且仅当代码相同。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// 联合国地点代码
    pub code: UnLocode,

    /// 地点名称 (仅展示用, 不参与相等性判断)
    pub name: String,
}

impl Location {
    /// 创建新的地点
    pub fn new(code: UnLocode, name: String) -> Self {
        Self { code, name }
    }
}

// 相等性只看代码
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocode_valid() {
        let code = UnLocode::new("HKG".to_string()).unwrap();
        assert_eq!(code.as_str(), "HKG");

        // 5 位标准格式
        let code = UnLocode::new("USDAL".to_string()).unwrap();
        assert_eq!(code.to_string(), "USDAL");
    }

    #[test]
    fn test_unlocode_invalid() {
        // 太短
        assert_eq!(
            UnLocode::new("HK".to_string()),
            Err(DomainError::InvalidLocationCode("HK".to_string()))
        );

        // 太长
        assert!(UnLocode::new("USDALX".to_string()).is_err());

        // 小写
        assert!(UnLocode::new("hkg".to_string()).is_err());

        // 非法字符
        assert!(UnLocode::new("HK-".to_string()).is_err());

        // 空串
        assert!(UnLocode::new(String::new()).is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_code() {
        // 反序列化与构造走同一套校验
        assert!(serde_json::from_str::<UnLocode>("\"hk\"").is_err());
        assert!(serde_json::from_str::<UnLocode>("\"USDALX\"").is_err());

        let code: UnLocode = serde_json::from_str("\"HKG\"").unwrap();
        assert_eq!(code.as_str(), "HKG");
    }

    #[test]
    fn test_location_equality_by_code_only() {
        let a = Location::new(UnLocode::new("DAL".to_string()).unwrap(), "Dallas".to_string());
        let b = Location::new(UnLocode::new("DAL".to_string()).unwrap(), "达拉斯".to_string());
        let c = Location::new(UnLocode::new("HKG".to_string()).unwrap(), "Dallas".to_string());

        // 代码相同即相等, 名称不参与
        assert_eq!(a, b);
        // 名称相同但代码不同, 不相等
        assert_ne!(a, c);
    }

    #[test]
    fn test_location_display() {
        let loc = Location::new(
            UnLocode::new("HKG".to_string()).unwrap(),
            "Hong Kong".to_string(),
        );
        assert_eq!(loc.to_string(), "Hong Kong (HKG)");
    }
}

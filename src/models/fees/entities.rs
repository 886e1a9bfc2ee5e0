use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 收费周期
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub enum FeeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl<'de> Deserialize<'de> for FeeFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for FeeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeFrequency::Daily => write!(f, "daily"),
            FeeFrequency::Weekly => write!(f, "weekly"),
            FeeFrequency::Monthly => write!(f, "monthly"),
            FeeFrequency::Yearly => write!(f, "yearly"),
        }
    }
}

impl std::str::FromStr for FeeFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(FeeFrequency::Daily),
            "weekly" => Ok(FeeFrequency::Weekly),
            "monthly" => Ok(FeeFrequency::Monthly),
            "yearly" => Ok(FeeFrequency::Yearly),
            _ => Err(format!(
                "无效的收费周期: '{s}'. 支持: daily, weekly, monthly, yearly"
            )),
        }
    }
}

// 缴费记录（只增不改）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct Fee {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub amount_paid: f64,
    pub description: Option<String>,
    // 实际付款人，目前总是学生本人
    pub paid_by: i64,
    pub paid_at: chrono::DateTime<chrono::Utc>,
}

// 班级收费标准，每个班级至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee.ts")]
pub struct ClassFee {
    pub id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub amount: f64,
    pub frequency: FeeFrequency,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

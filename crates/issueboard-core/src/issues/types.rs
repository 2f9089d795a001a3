use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a reported issue.
///
/// The board tracks problems reported around a rural tourism area; the
/// categories (and their stored labels) come from the shared table and are
/// a closed set. Rows carry the label text itself, so the serde renames
/// and [`IssueCategory::label`] must stay in sync with the table contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueCategory {
    /// 交通与基础设施
    #[serde(rename = "交通与基础设施")]
    Transportation,
    /// 旅游产品与业态
    #[serde(rename = "旅游产品与业态")]
    TourismProduct,
    /// 三农融合与民生
    #[serde(rename = "三农融合与民生")]
    Livelihood,
    /// 生态保护与治理
    #[serde(rename = "生态保护与治理")]
    Ecology,
    /// 运营管理与服务
    #[serde(rename = "运营管理与服务")]
    Management,
    /// 其他相关问题
    #[serde(rename = "其他相关问题")]
    Other,
}

impl IssueCategory {
    /// All categories, in display order.
    pub const ALL: [IssueCategory; 6] = [
        IssueCategory::Transportation,
        IssueCategory::TourismProduct,
        IssueCategory::Livelihood,
        IssueCategory::Ecology,
        IssueCategory::Management,
        IssueCategory::Other,
    ];

    /// The label stored in the table and shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Transportation => "交通与基础设施",
            IssueCategory::TourismProduct => "旅游产品与业态",
            IssueCategory::Livelihood => "三农融合与民生",
            IssueCategory::Ecology => "生态保护与治理",
            IssueCategory::Management => "运营管理与服务",
            IssueCategory::Other => "其他相关问题",
        }
    }

    /// Parse a stored label back into a category.
    ///
    /// Returns `None` for labels outside the closed set; callers decide
    /// how loudly to fail (the store treats it as a decode error).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Workflow state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    /// 待解决 - reported, nobody working on it yet
    #[serde(rename = "待解决")]
    Pending,
    /// 处理中 - being worked on
    #[serde(rename = "处理中")]
    InProgress,
    /// 已解决 - resolved
    #[serde(rename = "已解决")]
    Resolved,
    /// 待补充 - needs more information from the reporter
    #[serde(rename = "待补充")]
    NeedsInfo,
}

impl IssueStatus {
    /// All statuses, in workflow order.
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Pending,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::NeedsInfo,
    ];

    /// The label stored in the table and shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "待解决",
            IssueStatus::InProgress => "处理中",
            IssueStatus::Resolved => "已解决",
            IssueStatus::NeedsInfo => "待补充",
        }
    }

    /// Parse a stored label back into a status.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

/// One row of the shared issue table.
///
/// Records are created, updated and deleted entirely by external
/// collaborators; this type is a read-only mirror. `last_updated` drives
/// the server-side sort order and the timestamp shown per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub category: IssueCategory,
    pub description: String,
    pub impact: Option<String>,
    pub status: IssueStatus,
    pub remarks: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_round_trip() {
        for category in IssueCategory::ALL {
            assert_eq!(IssueCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_status_label_round_trip() {
        for status in IssueStatus::ALL {
            assert_eq!(IssueStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(IssueCategory::from_label("transportation"), None);
        assert_eq!(IssueCategory::from_label(""), None);
        assert_eq!(IssueStatus::from_label("done"), None);
    }

    #[test]
    fn test_category_labels_distinct() {
        for (i, a) in IssueCategory::ALL.iter().enumerate() {
            for b in &IssueCategory::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_serde_uses_stored_labels() {
        let json = serde_json::to_string(&IssueStatus::Pending).unwrap();
        assert_eq!(json, "\"待解决\"");

        let parsed: IssueCategory = serde_json::from_str("\"生态保护与治理\"").unwrap();
        assert_eq!(parsed, IssueCategory::Ecology);
    }

    #[test]
    fn test_issue_serde_round_trip() {
        let issue = Issue {
            id: "issue-1".to_string(),
            category: IssueCategory::Transportation,
            description: "村口公路破损".to_string(),
            impact: Some("游客通行困难".to_string()),
            status: IssueStatus::InProgress,
            remarks: None,
            created_at: None,
            last_updated: Some(Utc::now()),
        };

        let json = serde_json::to_string(&issue).unwrap();
        let back: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, issue);
    }
}

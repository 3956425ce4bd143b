use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: Some(10),
            offset: Some(0),
            page: None,
        }
    }
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).max(1).min(100)
    }

    pub fn offset(&self) -> i64 {
        // If page is provided, calculate offset from page
        if let Some(page) = self.page {
            let page = page.max(1);
            (page - 1) * self.limit()
        } else {
            self.offset.unwrap_or(0).max(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_default() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_custom_values() {
        let params = PaginationParams {
            limit: Some(20),
            offset: Some(40),
            page: None,
        };
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_pagination_params_limit_boundaries() {
        for (input, expected) in [
            (Some(0), 1),
            (Some(-1), 1),
            (Some(1), 1),
            (Some(100), 100),
            (Some(150), 100),
        ] {
            let params = PaginationParams {
                limit: input,
                offset: Some(0),
                page: None,
            };
            assert_eq!(params.limit(), expected);
        }
    }

    #[test]
    fn test_pagination_params_offset_negative() {
        let params = PaginationParams {
            limit: Some(10),
            offset: Some(-5),
            page: None,
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_page_overrides_offset() {
        let params = PaginationParams {
            limit: Some(10),
            offset: Some(99),
            page: Some(3),
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_pagination_params_deserialize_query_strings() {
        let json = r#"{"limit":"25","offset":"50"}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_pagination_params_deserialize_empty_strings() {
        let json = r#"{"limit":"","offset":""}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_deserialize_missing_fields() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }
}

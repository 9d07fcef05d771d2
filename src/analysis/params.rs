//! Request parameter parsing.
//!
//! The routing layer hands parameters through as raw strings; anything
//! missing or non-numeric is rejected here, before a single store query is
//! issued.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshMapParams {
    pub user_id: i64,
    pub timeline_count: usize,
    pub impression_cap: usize,
}

impl RefreshMapParams {
    pub fn parse(
        user_id: Option<&str>,
        timeline_count: Option<&str>,
        impression_cap: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            user_id: positive_i64("userId", user_id)?,
            timeline_count: positive_usize("timelineCount", timeline_count)?,
            impression_cap: positive_usize("impressionCap", impression_cap)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostRealityParams {
    pub post_id: i64,
}

impl PostRealityParams {
    pub fn parse(post_id: Option<&str>) -> Result<Self> {
        Ok(Self {
            post_id: positive_i64("postId", post_id)?,
        })
    }
}

fn positive_i64(name: &'static str, raw: Option<&str>) -> Result<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .ok_or(Error::InvalidParameter { name })
}

fn positive_usize(name: &'static str, raw: Option<&str>) -> Result<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .ok_or(Error::InvalidParameter { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_parameters() {
        let params = RefreshMapParams::parse(Some("42"), Some("6"), Some("20")).unwrap();
        assert_eq!(
            params,
            RefreshMapParams {
                user_id: 42,
                timeline_count: 6,
                impression_cap: 20,
            }
        );
    }

    #[test]
    fn missing_parameter_is_rejected_by_name() {
        let err = RefreshMapParams::parse(None, Some("6"), Some("20")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "userId" }));
    }

    #[test]
    fn non_numeric_parameter_is_rejected() {
        let err = PostRealityParams::parse(Some("abc")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "postId" }));
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(PostRealityParams::parse(Some("0")).is_err());
        assert!(PostRealityParams::parse(Some("-3")).is_err());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let params = PostRealityParams::parse(Some(" 17 ")).unwrap();
        assert_eq!(params.post_id, 17);
    }
}

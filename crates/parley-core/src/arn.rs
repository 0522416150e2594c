//! Lambda ARN helpers.

/// Region reported when an ARN cannot be parsed.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Extract the region from a Lambda function ARN.
///
/// Expects `arn:aws:lambda:<region>:<account-id>:function:<name>`. Any
/// other shape, or an empty region segment, yields [`DEFAULT_REGION`].
pub fn region_from_function_arn(arn: &str) -> &str {
    let mut parts = arn.splitn(5, ':');
    let prefix = (parts.next(), parts.next(), parts.next());
    match (prefix, parts.next(), parts.next()) {
        ((Some("arn"), Some(_), Some("lambda")), Some(region), Some(_)) if !region.is_empty() => {
            region
        }
        _ => DEFAULT_REGION,
    }
}

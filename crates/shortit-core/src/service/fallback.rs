//! Fallback tier: TinyURL-style plain-text API.
//!
//! Request: `GET <endpoint>?url=<encoded>`. The body is the short URL; the
//! HTTP status is the only failure signal.

use url::Url;

use super::{with_query, TierError};
use crate::transport::HttpResponse;

pub fn request_url(endpoint: &Url, long_url: &str) -> Url {
    with_query(endpoint, &[("url", long_url)])
}

pub fn parse_response(resp: &HttpResponse) -> Result<String, TierError> {
    if !resp.is_success() {
        return Err(TierError::Status(resp.status));
    }
    let short = resp.text().trim().to_string();
    if short.is_empty() {
        return Err(TierError::Malformed("empty body".to_string()));
    }
    Ok(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_has_single_url_param() {
        let endpoint = Url::parse("https://tinyurl.com/api-create.php").unwrap();
        let url = request_url(&endpoint, "https://example.com/?a=1&b=2");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("url".to_string(), "https://example.com/?a=1&b=2".to_string())]
        );
    }

    #[test]
    fn body_is_trimmed() {
        let resp = HttpResponse::new(200, "https://tinyurl.com/y7abc\n");
        assert_eq!(parse_response(&resp).unwrap(), "https://tinyurl.com/y7abc");
    }

    #[test]
    fn error_status_fails() {
        let resp = HttpResponse::new(400, "Error");
        assert!(matches!(parse_response(&resp), Err(TierError::Status(400))));
    }

    #[test]
    fn empty_body_fails() {
        let resp = HttpResponse::new(200, " \r\n");
        assert!(matches!(parse_response(&resp), Err(TierError::Malformed(_))));
    }
}

use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("Could not load native TLS root certificates")]
    NativeRoots,
}

pub fn http_client() -> error_stack::Result<
    hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    HttpClientError,
> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(HttpClientError::NativeRoots)?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_builds() {
        assert!(http_client().is_ok());
    }
}

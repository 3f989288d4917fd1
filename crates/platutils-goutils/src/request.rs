use http::Request;

/// Dump of a request's URI and body for debug output
pub fn request_debug<B: AsRef<[u8]>>(request: &Request<B>) -> String {
    format!(
        "URL: {}\nBody..\n{}\n",
        request.uri(),
        String::from_utf8_lossy(request.body().as_ref())
    )
}

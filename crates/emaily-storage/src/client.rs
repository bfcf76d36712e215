use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS credential and region chain.
///
/// `endpoint_url` points the client at an S3-compatible server (MinIO,
/// LocalStack). Those servers generally need path-style addressing.
pub async fn build_client(endpoint_url: Option<&str>) -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

    let mut builder = aws_sdk_s3::config::Builder::from(&config);
    if let Some(url) = endpoint_url {
        tracing::debug!(endpoint = url, "using custom S3 endpoint");
        builder = builder.endpoint_url(url).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

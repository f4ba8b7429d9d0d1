use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config chain.
///
/// `AWS_REGION`, credentials and `AWS_ENDPOINT_URL` (for S3-compatible local
/// stores) are all picked up from the environment.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}

use akhenaten_client::{
    ArtifactService, ConfigSource, DownloadOutcome, MetadataRecord, Slug, create_s3_client,
};
use serde_json::json;

// Note: These tests require MinIO to be running and configured via environment variables:
// - MINIO_ENDPOINT (default: http://localhost:9000)
// - MINIO_ACCESS_KEY_ID (default: minioadmin)
// - MINIO_SECRET_ACCESS_KEY (default: minioadmin)
// - MINIO_BUCKET (default: test-bucket, must already exist)

#[tokio::test]
#[ignore = "requires MinIO server to be running"]
async fn test_minio_artifact_round_trip() {
    let endpoint =
        std::env::var("MINIO_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());
    let access_key =
        std::env::var("MINIO_ACCESS_KEY_ID").unwrap_or_else(|_| "minioadmin".to_string());
    let secret_key =
        std::env::var("MINIO_SECRET_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string());
    let bucket = std::env::var("MINIO_BUCKET").unwrap_or_else(|_| "test-bucket".to_string());

    println!("Connecting to MinIO at {} with bucket {}", endpoint, bucket);

    let config = ConfigSource::builder()
        .endpoint(endpoint)
        .access_key(access_key)
        .secret_key(secret_key)
        .bucket(bucket)
        .region("us-east-1")
        .build()
        .resolve()
        .unwrap();
    let client = create_s3_client(config).unwrap();

    let slug = Slug::new(format!("minio-test-{}", uuid::Uuid::new_v4())).unwrap();
    let figure = json!({ "data": [{ "type": "bar", "x": ["a", "b"], "y": [1, 2] }] });
    let metadata = MetadataRecord::new("MinIO Test", "Tester").unwrap();

    let uploaded = client
        .upload_artifact(&figure, Some(slug.clone()), Some(metadata.clone()))
        .await
        .unwrap();
    assert!(uploaded.etag.is_some());
    assert!(uploaded.meta_etag.is_some());

    assert!(client.list_artifacts().await.unwrap().contains(&slug));

    match client.download_artifact(&slug).await.unwrap() {
        DownloadOutcome::Found {
            artifact,
            metadata: found,
        } => {
            assert_eq!(artifact, figure);
            assert_eq!(found, Some(metadata));
        }
        DownloadOutcome::NotFound => panic!("Uploaded figure not found"),
    }

    client.delete_artifact(&slug).await.unwrap();
    assert_eq!(
        client.download_artifact(&slug).await.unwrap(),
        DownloadOutcome::NotFound
    );
}

//! 本地文档缓存测试

use csat_marker::clients::AssetClient;
use csat_marker::infrastructure::DocumentStore;

fn make_store(tmp: &tempfile::TempDir) -> DocumentStore {
    DocumentStore::with_dir(tmp.path().join("cache")).unwrap()
}

/// 落盘后命中：local_path 指向 {id}.pdf
#[tokio::test]
async fn test_store_and_hit() {
    let tmp = tempfile::tempdir().unwrap();
    let store = make_store(&tmp);

    assert!(!store.is_cached("doc-a"));

    let path = store.store("doc-a", b"%PDF-bytes").await.unwrap();
    assert!(store.is_cached("doc-a"));
    assert_eq!(path, store.local_path("doc-a"));
    assert_eq!(path.file_name().unwrap(), "doc-a.pdf");
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-bytes");
}

/// 缓存命中时 resolve 不触网（资源端点不可达也能返回）
#[tokio::test]
async fn test_resolve_cache_hit_skips_network() {
    let tmp = tempfile::tempdir().unwrap();
    let store = make_store(&tmp);
    store.store("doc-a", b"cached").await.unwrap();

    let assets = AssetClient::with_http(reqwest::Client::new(), "http://127.0.0.1:9");
    let path = store.resolve("doc-a", &assets).await.unwrap();

    assert_eq!(path, store.local_path("doc-a"));
}

/// 缓存未命中且下载失败时 resolve 报错，缓存目录保持干净
#[tokio::test]
async fn test_resolve_miss_with_unreachable_endpoint() {
    let tmp = tempfile::tempdir().unwrap();
    let store = make_store(&tmp);

    let assets = AssetClient::with_http(reqwest::Client::new(), "http://127.0.0.1:9");
    assert!(store.resolve("doc-missing", &assets).await.is_err());
    assert!(!store.is_cached("doc-missing"));
}

/// 统计与清空：cache_size / cached_files / clear_cache
#[test]
fn test_cache_accounting_and_clear() {
    let tmp = tempfile::tempdir().unwrap();
    let store = make_store(&tmp);

    tokio_test::block_on(async {
        store.store("doc-a", b"12345").await.unwrap();
        store.store("doc-b", b"1234567890").await.unwrap();
    });
    // 非 .pdf 文件不算缓存
    std::fs::write(store.cache_dir().join("notes.txt"), b"x").unwrap();

    assert_eq!(store.cache_size(), 15);
    let files = store.cached_files().unwrap();
    assert_eq!(files.len(), 2);

    store.clear_cache().unwrap();
    assert_eq!(store.cache_size(), 0);
    assert!(store.cached_files().unwrap().is_empty());
    // 清空只动 .pdf
    assert!(store.cache_dir().join("notes.txt").exists());
}

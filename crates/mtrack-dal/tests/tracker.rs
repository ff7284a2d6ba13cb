use mtrack_dal::{
    Error, ProgressOutcome, Query, SortMode, StatusFilter, Tracker,
    clock::FixedClock,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use bytes::Bytes;
use mtrack_store::{
    FileStore, MemoryStore, SlotInfo, Store, ValidKey,
    error::{StoreError, StoreResult},
};
use mtrack_types::{Category, RawFields, RecordFields, Status};

const NOW: i64 = 1_760_000_000_000;

fn key() -> ValidKey {
    ValidKey::new("mediaItems").unwrap()
}

async fn init_tracker(store: MemoryStore) -> Tracker<MemoryStore, FixedClock> {
    Tracker::load_with_clock(store, key(), FixedClock::new(NOW))
        .await
        .unwrap()
}

fn fields(title: &str, category: Category) -> RecordFields {
    RecordFields::new(title, category)
}

fn progress_fields(title: &str, current: u32, total: u32) -> RecordFields {
    let mut f = fields(title, Category::Anime);
    f.status = Status::in_progress();
    f.current_progress = current;
    f.total_count = total;
    f
}

/// Memory store whose writes can be switched to fail
#[derive(Clone, Default)]
struct BrokenDiskStore {
    inner: MemoryStore,
    broken: Arc<AtomicBool>,
}

impl BrokenDiskStore {
    fn break_writes(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }
}

impl Store for BrokenDiskStore {
    async fn load_data(&self, key: &ValidKey) -> StoreResult<Bytes> {
        self.inner.load_data(key).await
    }

    async fn store_data_overwrite(&self, key: &ValidKey, data: &[u8]) -> StoreResult<SlotInfo> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(StoreError::InvalidRoot);
        }
        self.inner.store_data_overwrite(key, data).await
    }
}

fn yes(_prompt: &str) -> bool {
    true
}

fn no(_prompt: &str) -> bool {
    false
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let mut ids = Vec::new();
    for i in 0..5 {
        let before = tracker.items().len();
        let record = tracker
            .create(fields(&format!("Game {i}"), Category::Game))
            .await
            .unwrap();
        assert_eq!(tracker.items().len(), before + 1);
        assert!(!ids.contains(&record.id));
        ids.push(record.id);
        assert_eq!(record.created_at, format!("@{NOW}"));
    }
    // same clock reading, still strictly increasing
    assert_eq!(ids, (0..5).map(|i| NOW + i).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let store = MemoryStore::new();
    let mut tracker = init_tracker(store.clone()).await;
    let res = tracker.create(fields("   ", Category::Game)).await;
    assert!(matches!(res, Err(Error::ValidationRejected(_))));
    assert!(tracker.items().is_empty());
    // nothing was persisted
    assert!(matches!(
        store.load_data(&key()).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_edit_preserves_identity() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let original = tracker
        .create(fields("Elden Ring", Category::Game))
        .await
        .unwrap();

    let new_fields = RecordFields {
        title: "Elden Ring: Nightreign".into(),
        category: Category::Game,
        status: Status::completed(),
        rating: 4,
        link: Some("https://example.com".into()),
        review: Some("Short but sweet".into()),
        current_progress: 1,
        total_count: 1,
    };
    let updated = tracker.update(original.id, new_fields.clone()).await.unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.fields(), new_fields);
    assert_eq!(tracker.get(original.id), Some(&updated));
}

#[tokio::test]
async fn test_edit_clears_omitted_optional_fields() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let mut with_link = fields("Dune", Category::Movie);
    with_link.link = Some("https://example.com/dune".into());
    let original = tracker.create(with_link).await.unwrap();

    let updated = tracker
        .update(original.id, fields("Dune", Category::Movie))
        .await
        .unwrap();
    assert_eq!(updated.link, None);
}

#[tokio::test]
async fn test_increment_progress() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let record = tracker.create(progress_fields("Frieren", 3, 28)).await.unwrap();

    let outcome = tracker.increment_progress(record.id, 3, 28).await.unwrap();
    match outcome {
        ProgressOutcome::Advanced(r) => assert_eq!(r.current_progress, 4),
        other => panic!("Unexpected outcome {other:?}"),
    }
    assert_eq!(tracker.get(record.id).unwrap().current_progress, 4);
}

#[tokio::test]
async fn test_increment_progress_at_total_is_noop() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let record = tracker.create(progress_fields("Frieren", 28, 28)).await.unwrap();
    let before = tracker.items().clone();

    let outcome = tracker.increment_progress(record.id, 28, 28).await.unwrap();
    assert_eq!(outcome, ProgressOutcome::AlreadyComplete);
    assert_eq!(tracker.items(), &before);

    // stale snapshot past total is ignored as well
    let outcome = tracker.increment_progress(record.id, 30, 28).await.unwrap();
    assert_eq!(outcome, ProgressOutcome::AlreadyComplete);
    assert_eq!(tracker.items(), &before);
}

#[tokio::test]
async fn test_increment_progress_without_total() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let record = tracker.create(progress_fields("One Piece", 1100, 0)).await.unwrap();
    tracker.increment_progress(record.id, 1100, 0).await.unwrap();
    assert_eq!(tracker.get(record.id).unwrap().current_progress, 1101);

    let res = tracker.increment_progress(record.id + 1, 0, 0).await;
    assert!(matches!(res, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_delete() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let a = tracker.create(fields("A", Category::Game)).await.unwrap();
    let b = tracker.create(fields("B", Category::Manga)).await.unwrap();

    let before = tracker.items().clone();
    let mut asked = false;
    let res = tracker
        .delete(b.id + 100, &mut |_: &str| {
            asked = true;
            true
        })
        .await;
    assert!(matches!(res, Err(Error::NotFound(_))));
    assert!(!asked);
    assert_eq!(tracker.items(), &before);

    let res = tracker.delete(a.id, &mut no).await;
    assert!(matches!(res, Err(Error::Cancelled)));
    assert_eq!(tracker.items(), &before);

    let mut prompts = Vec::new();
    let removed = tracker
        .delete(a.id, &mut |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        })
        .await
        .unwrap();
    assert_eq!(removed.id, a.id);
    assert_eq!(prompts.len(), 1);
    assert_eq!(tracker.items().len(), 1);
    assert!(tracker.get(a.id).is_none());
}

#[tokio::test]
async fn test_persisted_between_sessions() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(tmp_dir.path());
    let mut tracker = Tracker::load_with_clock(store.clone(), key(), FixedClock::new(NOW))
        .await
        .unwrap();
    let record = tracker
        .create(fields("Berserk", Category::Manga))
        .await
        .unwrap();
    drop(tracker);

    let tracker = Tracker::load(store, key()).await.unwrap();
    assert_eq!(tracker.items().len(), 1);
    assert_eq!(tracker.get(record.id), Some(&record));
    assert!(tmp_dir.path().join("mediaItems.json").exists());
}

#[tracing_test::traced_test]
#[tokio::test]
async fn test_malformed_snapshot_loads_empty() {
    let store = MemoryStore::new();
    store
        .store_data_overwrite(&key(), b"{not valid json")
        .await
        .unwrap();
    let tracker = init_tracker(store).await;
    assert!(tracker.items().is_empty());
    assert!(logs_contain("Starting with empty collection"));
}

#[tokio::test]
async fn test_snapshot_from_legacy_shape() {
    let store = MemoryStore::new();
    let legacy = r#"[{"title":"Attack on Titan","category":"Anime","status":"Planned",
        "rating":null,"link":"","review":"","current_progress":0,"total_count":"25",
        "id":1717000000000,"created_at":"5/29/2024, 10:00:00 AM"}]"#;
    store
        .store_data_overwrite(&key(), legacy.as_bytes())
        .await
        .unwrap();
    let tracker = init_tracker(store).await;
    let record = tracker.get(1717000000000).unwrap();
    assert_eq!(record.rating, 0);
    assert_eq!(record.total_count, 25);
    assert_eq!(record.link, None);
}

#[tokio::test]
async fn test_backup_round_trip() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    tracker.create(fields("Hades", Category::Game)).await.unwrap();
    tracker.create(progress_fields("Frieren", 3, 28)).await.unwrap();
    let original = tracker.items().clone();

    let document = tracker.export().unwrap();
    let restored = tracker.import(&document, &mut yes).await.unwrap();
    assert_eq!(restored, 2);
    assert_eq!(tracker.items(), &original);

    let mut other = init_tracker(MemoryStore::new()).await;
    other.import(&document, &mut yes).await.unwrap();
    assert_eq!(other.items(), &original);
}

#[tokio::test]
async fn test_import_failures_keep_collection() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    tracker.create(fields("Hades", Category::Game)).await.unwrap();
    let before = tracker.items().clone();

    let mut asked = false;
    let res = tracker
        .import("definitely not json", &mut |_: &str| {
            asked = true;
            true
        })
        .await;
    assert!(matches!(res, Err(Error::ParseError(_))));
    assert!(!asked);
    assert_eq!(tracker.items(), &before);

    let duplicates = r#"[{"id": 1, "title": "A", "category": "Game"},
        {"id": 1, "title": "B", "category": "Game"}]"#;
    let res = tracker.import(duplicates, &mut yes).await;
    assert!(matches!(res, Err(Error::InvalidBackup(_))));
    assert_eq!(tracker.items(), &before);

    let res = tracker.import("[]", &mut no).await;
    assert!(matches!(res, Err(Error::Cancelled)));
    assert_eq!(tracker.items(), &before);

    // accepted import replaces everything
    tracker.import("[]", &mut yes).await.unwrap();
    assert!(tracker.items().is_empty());
}

#[tokio::test]
async fn test_view_over_tracker() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    tracker.create(fields("Vagabond", Category::Manga)).await.unwrap();
    tracker.create(progress_fields("Attack on Titan", 3, 25)).await.unwrap();
    tracker.create(fields("Hades", Category::Game)).await.unwrap();
    tracker.create(fields("Berserk", Category::Manga)).await.unwrap();

    let groups = tracker.view(&Query::new().with_sort(SortMode::Az));
    let sections: Vec<(Category, Vec<&str>)> = groups
        .iter()
        .map(|g| {
            (
                g.category,
                g.records.iter().map(|r| r.title.as_str()).collect(),
            )
        })
        .collect();
    assert_eq!(
        sections,
        vec![
            (Category::Game, vec!["Hades"]),
            (Category::Anime, vec!["Attack on Titan"]),
            (Category::Manga, vec!["Berserk", "Vagabond"]),
        ]
    );

    let groups = tracker.view(&Query::new().with_filter(StatusFilter::Progress));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, Category::Anime);

    let groups = tracker.view(&Query::new().with_search("aot"));
    assert_eq!(groups[0].records[0].title, "Attack on Titan");
}

#[tokio::test]
async fn test_form_input_flow() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let raw = RawFields {
        title: " Spirited Away ".into(),
        category: "Movie".into(),
        status: "Completed".into(),
        rating: "5".into(),
        current_progress: "abc".into(),
        total_count: "-3".into(),
        ..Default::default()
    };
    let record = tracker.create(raw.coerce().unwrap()).await.unwrap();
    assert_eq!(record.title, "Spirited Away");
    assert_eq!(record.current_progress, 0);
    assert_eq!(record.total_count, 0);
    assert_eq!(tracker.dashboard().finished, 1);
}

#[tokio::test]
async fn test_failed_write_keeps_collection() {
    let store = BrokenDiskStore::default();
    let mut tracker = Tracker::load_with_clock(store.clone(), key(), FixedClock::new(NOW))
        .await
        .unwrap();
    let record = tracker
        .create(progress_fields("Frieren", 3, 28))
        .await
        .unwrap();
    let before = tracker.items().clone();
    let mut events = tracker.subscribe();
    store.break_writes();

    let res = tracker.create(fields("Hades", Category::Game)).await;
    assert!(matches!(res, Err(Error::Store(_))));
    assert_eq!(tracker.items(), &before);

    let res = tracker
        .update(record.id, fields("Sousou no Frieren", Category::Anime))
        .await;
    assert!(matches!(res, Err(Error::Store(_))));
    assert_eq!(tracker.items(), &before);

    let res = tracker.increment_progress(record.id, 3, 28).await;
    assert!(matches!(res, Err(Error::Store(_))));
    assert_eq!(tracker.items(), &before);

    let res = tracker.delete(record.id, &mut yes).await;
    assert!(matches!(res, Err(Error::Store(_))));
    assert_eq!(tracker.items(), &before);

    let backup = r#"[{"id": 1, "title": "A", "category": "Game"},
        {"id": 2, "title": "B", "category": "Movie"}]"#;
    let res = tracker.import(backup, &mut yes).await;
    assert!(matches!(res, Err(Error::Store(_))));
    assert_eq!(tracker.items(), &before);

    // nothing was announced as saved
    assert!(events.try_recv().is_err());

    // disk still holds the last good snapshot
    let reloaded = Tracker::load_with_clock(store, key(), FixedClock::new(NOW))
        .await
        .unwrap();
    assert_eq!(reloaded.items(), &before);
}

#[tokio::test]
async fn test_create_after_import_of_max_id() {
    let mut tracker = init_tracker(MemoryStore::new()).await;
    let backup = format!(r#"[{{"id": {}, "title": "A", "category": "Game"}}]"#, i64::MAX);
    tracker.import(&backup, &mut yes).await.unwrap();
    let before = tracker.items().clone();

    let res = tracker.create(fields("Hades", Category::Game)).await;
    assert!(matches!(res, Err(Error::IdsExhausted)));
    assert_eq!(tracker.items(), &before);
}

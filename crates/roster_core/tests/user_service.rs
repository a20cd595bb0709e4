use roster_core::{
    MemoryStore, RepoError, RepoResult, ServiceError, StoreError, StoreUserRepository, User,
    UserId, UserRepository, UserService, UserStore,
};

#[test]
fn register_valid_user_appears_in_listing() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    service.register_user(&User::new(3, "Lucía")).unwrap();

    let users = service.list_users().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2].id(), 3);
    assert_eq!(users[2].name(), "Lucía");
}

#[test]
fn seeded_roster_lists_in_storage_order() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let service = UserService::new(repo);

    let users = service.list_users().unwrap();
    assert_eq!(users[0].name(), "Carlos");
    assert_eq!(users[1].name(), "Ana");
}

#[test]
fn register_rejects_zero_id() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    let err = service.register_user(&User::new(0, "Prueba")).unwrap_err();
    assert!(matches!(err, ServiceError::NonPositiveId(0)));
    assert_eq!(err.to_string(), "the user id must be greater than 0");
}

#[test]
fn register_rejects_negative_id() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    let err = service.register_user(&User::new(-5, "Prueba")).unwrap_err();
    assert!(matches!(err, ServiceError::NonPositiveId(-5)));
}

#[test]
fn register_rejects_empty_and_whitespace_names() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    let err = service.register_user(&User::new(5, "")).unwrap_err();
    assert!(matches!(err, ServiceError::BlankName));
    assert_eq!(err.to_string(), "the name must not be empty");

    let err = service.register_user(&User::new(5, "   ")).unwrap_err();
    assert!(matches!(err, ServiceError::BlankName));
}

#[test]
fn id_rule_is_checked_before_name_rule() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    let err = service.register_user(&User::new(0, "")).unwrap_err();
    assert!(matches!(err, ServiceError::NonPositiveId(0)));
}

#[test]
fn failed_validation_leaves_store_untouched() {
    let mut store = MemoryStore::new();
    {
        let repo = StoreUserRepository::new(&mut store);
        let mut service = UserService::new(repo);

        service.register_user(&User::new(0, "Prueba")).unwrap_err();
        service.register_user(&User::new(5, "")).unwrap_err();
    }

    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn delete_user_removes_id_from_listing_and_is_idempotent() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    service.delete_user(1).unwrap();
    service.delete_user(1).unwrap();

    let ids: Vec<UserId> = service
        .list_users()
        .unwrap()
        .iter()
        .map(|user| user.id())
        .collect();
    assert!(!ids.contains(&1));
    assert_eq!(ids, vec![2]);
}

#[test]
fn registration_scenario_matches_expected_roster() {
    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    service.register_user(&User::new(3, "Lucía")).unwrap();

    let roster: Vec<(UserId, String)> = service
        .list_users()
        .unwrap()
        .iter()
        .map(|user| (user.id(), user.name().to_string()))
        .collect();
    assert_eq!(
        roster,
        vec![
            (1, "Carlos".to_string()),
            (2, "Ana".to_string()),
            (3, "Lucía".to_string()),
        ]
    );
}

/// Repository double whose every operation fails with a backend error, to
/// observe pass-through semantics at the service boundary.
struct FailingRepository;

impl FailingRepository {
    fn backend_error() -> RepoError {
        RepoError::Store(StoreError::Backend("connection reset".to_string()))
    }
}

impl UserRepository for FailingRepository {
    fn find_by_id(&self, _id: UserId) -> RepoResult<Option<User>> {
        Err(Self::backend_error())
    }

    fn find_all(&self) -> RepoResult<Vec<User>> {
        Err(Self::backend_error())
    }

    fn save(&mut self, _user: &User) -> RepoResult<()> {
        Err(Self::backend_error())
    }

    fn delete_by_id(&mut self, _id: UserId) -> RepoResult<()> {
        Err(Self::backend_error())
    }
}

#[test]
fn repository_failures_pass_through_unmodified() {
    let mut service = UserService::new(FailingRepository);

    let err = service.register_user(&User::new(3, "Lucía")).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepoError::Store(StoreError::Backend(_)))
    ));
    assert_eq!(err.to_string(), "store backend failure: connection reset");

    assert!(service.list_users().is_err());
    assert!(service.delete_user(1).is_err());
}

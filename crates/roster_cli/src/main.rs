//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive the seeded registration flow end to end from a terminal.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::{MemoryStore, StoreUserRepository, User, UserRepository, UserService};

fn main() {
    println!("roster_core version={}", roster_core::core_version());

    let mut store = MemoryStore::new();
    let repo = StoreUserRepository::new(&mut store);
    let mut service = UserService::new(repo);

    if let Err(err) = service.register_user(&User::new(3, "Lucía")) {
        eprintln!("register failed: {err}");
        std::process::exit(1);
    }
    print_roster("after register", &service);

    if let Err(err) = service.delete_user(1) {
        eprintln!("delete failed: {err}");
        std::process::exit(1);
    }
    print_roster("after delete", &service);
}

fn print_roster<R: UserRepository>(label: &str, service: &UserService<R>) {
    match service.list_users() {
        Ok(users) => {
            println!("{label}: {} users", users.len());
            for user in &users {
                println!("  id={} name={}", user.id(), user.name());
            }
        }
        Err(err) => {
            eprintln!("list failed: {err}");
            std::process::exit(1);
        }
    }
}

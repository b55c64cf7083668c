use super::*;
use chrono::Utc;

struct Note {
    owner: i32,
}

impl Owned for Note {
    fn owner_id(&self) -> i32 {
        self.owner
    }
}

fn user(id: i32) -> User {
    User {
        id,
        github_id: id as i64,
        name: format!("user{id}"),
        profile_image_uri: String::new(),
        created_at: Utc::now(),
    }
}

#[test]
fn owner_passes_check() {
    let note = Note { owner: 7 };

    assert!(is_owner(&user(7), &note));
    assert!(ensure_owner(&user(7), &note, "update note").is_ok());
}

#[test]
fn non_owner_is_denied_with_actor_id() {
    let note = Note { owner: 7 };

    assert!(!is_owner(&user(8), &note));
    let err = ensure_owner(&user(8), &note, "update note").unwrap_err();

    match err {
        AppError::AuthErr(AuthError::AccessDenied(actor, message)) => {
            assert_eq!(actor, 8);
            assert!(message.contains("update note"));
        }
        other => panic!("expected AccessDenied, got {other:?}"),
    }
}

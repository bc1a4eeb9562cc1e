// tests/user_service_tests.rs
mod support;

use chrono::Duration;
use eijafilm::application::{
    commands::{
        films::CreateFilmCommand,
        reviews::SubmitCommentCommand,
        users::{
            DeleteUserCommand, ForgotPasswordCommand, LoginUserCommand, RegisterUserCommand,
            ResetPasswordCommand, UpdateProfileCommand, UpdateUserCommand,
        },
    },
    error::ApplicationError,
};
use eijafilm::domain::{errors::DomainError, film::Category, user::Role};
use support::{TestApp, actor};

fn register_cmd(email: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        name: "Someone".into(),
        email: email.into(),
        password: password.into(),
    }
}

fn login_cmd(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn first_account_is_admin_and_later_ones_are_users() {
    let app = TestApp::new();
    let first = app.register("Ada", "ada@example.com").await;
    let second = app.register("Bo", "bo@example.com").await;

    assert_eq!(first.role, Role::Admin);
    assert_eq!(second.role, Role::User);
    assert!(second.is_active);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_regardless_of_case() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;

    let err = app
        .services
        .user_commands
        .register(register_cmd("ADA@Example.com", "popcorn42"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)), "got {err:?}");
    assert_eq!(app.db.user_count(), 1);
}

#[tokio::test]
async fn weak_password_is_rejected_before_anything_is_stored() {
    let app = TestApp::new();
    let err = app
        .services
        .user_commands
        .register(register_cmd("ada@example.com", "password"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(app.db.user_count(), 0);
}

#[tokio::test]
async fn login_issues_token_for_valid_credentials() {
    let app = TestApp::new();
    let user = app.register("Ada", "ada@example.com").await;

    let result = app
        .services
        .user_commands
        .login(login_cmd("ada@example.com", "popcorn42"))
        .await
        .unwrap();

    assert_eq!(result.user.id, user.id);
    assert_eq!(result.token.token, format!("user:{}:ADMIN", user.id));
}

#[tokio::test]
async fn login_with_wrong_password_or_unknown_email_is_unauthenticated() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;

    for (email, password) in [
        ("ada@example.com", "wrongpass1"),
        ("nobody@example.com", "popcorn42"),
        ("not-an-email", "popcorn42"),
    ] {
        let err = app
            .services
            .user_commands
            .login(login_cmd(email, password))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthenticated(_)), "{email}: {err:?}");
    }
}

#[tokio::test]
async fn deactivated_account_cannot_log_in() {
    let app = TestApp::new();
    let admin = app.register("Ada", "ada@example.com").await;
    let user = app.register("Bo", "bo@example.com").await;

    app.services
        .user_commands
        .update_user(
            &actor(admin.id, Role::Admin),
            UpdateUserCommand {
                user_id: user.id,
                name: None,
                email: None,
                role: None,
                is_active: Some(false),
                image: None,
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .user_commands
        .login(login_cmd("bo@example.com", "popcorn42"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn only_admins_manage_accounts() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;
    let user = app.register("Bo", "bo@example.com").await;
    let as_user = actor(user.id, Role::User);

    let err = app.services.user_queries.list_users(&as_user).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = app
        .services
        .user_commands
        .update_user(
            &as_user,
            UpdateUserCommand {
                user_id: user.id,
                name: None,
                email: None,
                role: Some(Role::Admin),
                is_active: None,
                image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn admin_cannot_lock_themselves_out() {
    let app = TestApp::new();
    let admin = app.register("Ada", "ada@example.com").await;
    let as_admin = actor(admin.id, Role::Admin);

    let err = app
        .services
        .user_commands
        .delete_user(&as_admin, DeleteUserCommand { user_id: admin.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = app
        .services
        .user_commands
        .update_user(
            &as_admin,
            UpdateUserCommand {
                user_id: admin.id,
                name: None,
                email: None,
                role: None,
                is_active: Some(false),
                image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = app
        .services
        .user_commands
        .update_user(
            &as_admin,
            UpdateUserCommand {
                user_id: admin.id,
                name: None,
                email: None,
                role: Some(Role::User),
                is_active: None,
                image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");

    let session = app
        .services
        .user_commands
        .login(login_cmd("ada@example.com", "popcorn42"))
        .await
        .unwrap();
    assert_eq!(session.user.role, Role::Admin);
}

#[tokio::test]
async fn deleting_a_user_removes_their_reviews() {
    let app = TestApp::new();
    let admin = app.register("Ada", "ada@example.com").await;
    let user = app.register("Bo", "bo@example.com").await;
    let as_admin = actor(admin.id, Role::Admin);

    let film = app
        .services
        .film_commands
        .create_film(
            &as_admin,
            CreateFilmCommand {
                title: "Heat".into(),
                description: "LA crime".into(),
                category: Category::Movie,
                episode: None,
                poster_url: None,
                trailer_url: None,
                duration: None,
                release_year: None,
                genre_ids: vec![],
                castings: vec![],
            },
        )
        .await
        .unwrap();
    app.services
        .review_commands
        .submit_comment(
            &actor(user.id, Role::User),
            SubmitCommentCommand {
                film_id: film.id,
                content: "Great shootout".into(),
                reply_to_comment_id: None,
                score: Some(5),
            },
        )
        .await
        .unwrap();
    assert_eq!(app.db.rating_count(), 1);

    app.services
        .user_commands
        .delete_user(&as_admin, DeleteUserCommand { user_id: user.id })
        .await
        .unwrap();

    assert_eq!(app.db.user_count(), 1);
    assert_eq!(app.db.comment_count(), 0);
    assert_eq!(app.db.rating_count(), 0);
}

#[tokio::test]
async fn deleting_a_film_owner_is_refused() {
    let app = TestApp::new();
    let admin = app.register("Ada", "ada@example.com").await;
    let author = app.register("Cy", "cy@example.com").await;
    let as_admin = actor(admin.id, Role::Admin);

    app.services
        .film_commands
        .create_film(
            &actor(author.id, Role::Author),
            CreateFilmCommand {
                title: "Dark".into(),
                description: "Time travel".into(),
                category: Category::Series,
                episode: Some(26),
                poster_url: None,
                trailer_url: None,
                duration: None,
                release_year: Some(2017),
                genre_ids: vec![],
                castings: vec![],
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .user_commands
        .delete_user(&as_admin, DeleteUserCommand { user_id: author.id })
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Conflict(_))),
        "got {err:?}"
    );
    assert_eq!(app.db.user_count(), 2);
}

#[tokio::test]
async fn profile_update_rejects_email_of_another_account() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;
    let user = app.register("Bo", "bo@example.com").await;

    let err = app
        .services
        .user_commands
        .update_profile(
            &actor(user.id, Role::User),
            UpdateProfileCommand {
                name: None,
                email: Some("ada@example.com".into()),
                image: None,
                password: None,
                current_password: Some("popcorn42".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

fn password_change(new: &str, current: Option<&str>) -> UpdateProfileCommand {
    UpdateProfileCommand {
        name: Some("Ada L.".into()),
        email: None,
        image: None,
        password: Some(new.into()),
        current_password: current.map(str::to_string),
    }
}

#[tokio::test]
async fn profile_password_change_takes_effect_on_next_login() {
    let app = TestApp::new();
    let user = app.register("Ada", "ada@example.com").await;
    let as_ada = actor(user.id, Role::Admin);

    app.services
        .user_commands
        .update_profile(&as_ada, password_change("newpass99", Some("popcorn42")))
        .await
        .unwrap();

    assert!(
        app.services
            .user_commands
            .login(login_cmd("ada@example.com", "popcorn42"))
            .await
            .is_err()
    );
    let result = app
        .services
        .user_commands
        .login(login_cmd("ada@example.com", "newpass99"))
        .await
        .unwrap();
    assert_eq!(result.user.name, "Ada L.");
}

#[tokio::test]
async fn credential_changes_need_the_current_password() {
    let app = TestApp::new();
    let user = app.register("Ada", "ada@example.com").await;
    let as_ada = actor(user.id, Role::Admin);
    let commands = &app.services.user_commands;

    let err = commands
        .update_profile(&as_ada, password_change("newpass99", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");

    let err = commands
        .update_profile(&as_ada, password_change("newpass99", Some("guessed123")))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthenticated(_)), "got {err:?}");

    let err = commands
        .update_profile(
            &as_ada,
            UpdateProfileCommand {
                name: None,
                email: Some("mallory@example.com".into()),
                image: None,
                password: None,
                current_password: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    // Nothing changed: the old credentials still work and the name is untouched.
    let result = commands
        .login(login_cmd("ada@example.com", "popcorn42"))
        .await
        .unwrap();
    assert_eq!(result.user.name, "Ada");

    // Re-submitting the current email or editing the name alone needs no password.
    let renamed = commands
        .update_profile(
            &as_ada,
            UpdateProfileCommand {
                name: Some("Ada Lovelace".into()),
                email: Some("ADA@example.com".into()),
                image: None,
                password: None,
                current_password: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ada Lovelace");
}

#[tokio::test]
async fn reset_token_works_exactly_once() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;

    app.services
        .user_commands
        .forgot_password(ForgotPasswordCommand {
            email: "ada@example.com".into(),
        })
        .await
        .unwrap();
    let mail = app.mailer.sent().pop().expect("reset mail");
    assert_eq!(mail.to, "ada@example.com");
    assert!(mail.reset_link.starts_with("http://frontend.test/reset-password?token="));
    let token = app.mailer.last_token().unwrap();

    let reset = |password: &str| ResetPasswordCommand {
        token: token.clone(),
        password: password.into(),
    };
    app.services
        .user_commands
        .reset_password(reset("freshpass1"))
        .await
        .unwrap();
    let err = app
        .services
        .user_commands
        .reset_password(reset("otherpass2"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    app.services
        .user_commands
        .login(login_cmd("ada@example.com", "freshpass1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn expired_reset_token_is_rejected() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;
    app.services
        .user_commands
        .forgot_password(ForgotPasswordCommand {
            email: "ada@example.com".into(),
        })
        .await
        .unwrap();
    let token = app.mailer.last_token().unwrap();

    app.clock.advance(Duration::hours(2));

    let err = app
        .services
        .user_commands
        .reset_password(ResetPasswordCommand {
            token,
            password: "freshpass1".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn new_reset_request_invalidates_the_previous_link() {
    let app = TestApp::new();
    app.register("Ada", "ada@example.com").await;
    let forgot = || ForgotPasswordCommand {
        email: "ada@example.com".into(),
    };

    app.services.user_commands.forgot_password(forgot()).await.unwrap();
    let first = app.mailer.last_token().unwrap();
    app.services.user_commands.forgot_password(forgot()).await.unwrap();
    let second = app.mailer.last_token().unwrap();
    assert_ne!(first, second);

    let err = app
        .services
        .user_commands
        .reset_password(ResetPasswordCommand {
            token: first,
            password: "freshpass1".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    app.services
        .user_commands
        .reset_password(ResetPasswordCommand {
            token: second,
            password: "freshpass1".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn unknown_address_gets_no_mail_but_no_error() {
    let app = TestApp::new();
    app.services
        .user_commands
        .forgot_password(ForgotPasswordCommand {
            email: "ghost@example.com".into(),
        })
        .await
        .unwrap();

    assert!(app.mailer.sent().is_empty());
    assert!(app.db.reset_grants().is_empty());
}

// tests/integration_postgres.rs
mod support;

use std::sync::Arc;

use chrono::Duration;
use eijafilm::application::{
    commands::{
        CastingAssignmentInput,
        catalog::{CreateCastingCommand, CreateGenreCommand},
        films::{CreateFilmCommand, DeleteFilmCommand},
        relations::{ReplaceGenresCommand, SyncCastingsCommand},
        reviews::SubmitCommentCommand,
        users::{DeleteUserCommand, PasswordResetSettings, RegisterUserCommand},
    },
    queries::films::GetFilmBySlugQuery,
    services::{Adapters, ApplicationServices, Repositories},
};
use eijafilm::domain::user::Role;
use eijafilm::infrastructure::{
    database,
    repositories::{
        PostgresCastingRepository, PostgresFilmRepository, PostgresGenreRepository,
        PostgresPasswordResetRepository, PostgresRelationRepository, PostgresReviewRepository,
        PostgresUserRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use support::{CapturingMailer, FakeTokenManager, MemoryStorage, PlainPasswordHasher, actor};

fn enabled() -> bool {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return false;
    }
    true
}

async fn services() -> ApplicationServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url).await.expect("init pool");
    database::run_migrations(&pool).await.expect("run migrations");

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        password_resets: Arc::new(PostgresPasswordResetRepository::new(pool.clone())),
        films: Arc::new(PostgresFilmRepository::new(pool.clone())),
        genres: Arc::new(PostgresGenreRepository::new(pool.clone())),
        castings: Arc::new(PostgresCastingRepository::new(pool.clone())),
        relations: Arc::new(PostgresRelationRepository::new(pool.clone())),
        reviews: Arc::new(PostgresReviewRepository::new(pool)),
    };
    let adapters = Adapters {
        password_hasher: Arc::new(PlainPasswordHasher),
        token_manager: Arc::new(FakeTokenManager),
        mailer: Arc::new(CapturingMailer::default()),
        media_storage: Arc::new(MemoryStorage::default()),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
    };
    ApplicationServices::new(
        repos,
        adapters,
        PasswordResetSettings {
            ttl: Duration::hours(1),
            link_base: "http://frontend.test".into(),
        },
    )
}

#[tokio::test]
async fn integration_film_page_roundtrip() {
    if !enabled() {
        return;
    }
    let services = services().await;
    let tag = uuid::Uuid::new_v4().simple().to_string();

    let register = |name: &str| RegisterUserCommand {
        name: name.into(),
        email: format!("{name}-{tag}@integration.test"),
        password: "popcorn42".into(),
    };
    let owner = services.user_commands.register(register("owner")).await.unwrap();
    let fan = services.user_commands.register(register("fan")).await.unwrap();
    let as_owner = actor(owner.id, Role::Admin);
    let as_fan = actor(fan.id, Role::User);

    let genre = services
        .catalog_commands
        .create_genre(&as_owner, CreateGenreCommand { name: format!("genre-{tag}") })
        .await
        .unwrap();
    let casting = services
        .catalog_commands
        .create_casting(
            &as_owner,
            CreateCastingCommand {
                real_name: "Integration Actor".into(),
                stage_name: format!("actor-{tag}"),
                photo: None,
            },
        )
        .await
        .unwrap();

    let title = format!("Integration {tag}");
    let film = services
        .film_commands
        .create_film(
            &as_owner,
            CreateFilmCommand {
                title: title.clone(),
                description: "round trip".into(),
                category: eijafilm::domain::film::Category::Movie,
                episode: None,
                poster_url: None,
                trailer_url: None,
                duration: Some(90),
                release_year: Some(2024),
                genre_ids: vec![genre.id],
                castings: vec![CastingAssignmentInput {
                    casting_id: casting.id,
                    role: "Lead".into(),
                    photo: None,
                }],
            },
        )
        .await
        .unwrap();
    let twin = services
        .film_commands
        .create_film(
            &as_owner,
            CreateFilmCommand {
                title,
                description: "same title".into(),
                category: eijafilm::domain::film::Category::Movie,
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
    assert_eq!(twin.slug, format!("{}-1", film.slug));

    let replaced = services
        .relation_commands
        .replace_film_genres(
            &as_owner,
            ReplaceGenresCommand {
                film_id: film.id,
                genre_ids: vec![genre.id],
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.len(), 1);

    let before = services
        .relation_queries
        .list_casting_relations(Some(film.id))
        .await
        .unwrap();
    let synced = services
        .relation_commands
        .sync_film_castings(
            &as_owner,
            SyncCastingsCommand {
                film_id: film.id,
                castings: vec![CastingAssignmentInput {
                    casting_id: casting.id,
                    role: "Lead (uncredited)".into(),
                    photo: None,
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(synced.len(), 1);
    assert_eq!(synced[0].id, before[0].id);

    for (who, score) in [(&as_fan, 4), (&as_owner, 1)] {
        services
            .review_commands
            .submit_comment(
                who,
                SubmitCommentCommand {
                    film_id: film.id,
                    content: "integration".into(),
                    reply_to_comment_id: None,
                    score: Some(score),
                },
            )
            .await
            .unwrap();
    }

    let page = services
        .film_queries
        .get_film_by_slug(GetFilmBySlugQuery {
            slug: film.slug.clone(),
        })
        .await
        .unwrap();
    assert_eq!(page.comments.len(), 2);
    // The owner registered first only on an empty database, so their role varies.
    assert!(page.avg_rating >= 1.0 && page.avg_rating <= 4.0);

    for id in [film.id, twin.id] {
        services
            .film_commands
            .delete_film(&as_owner, DeleteFilmCommand { id })
            .await
            .unwrap();
    }
    let ratings = services.review_queries.list_ratings(Some(film.id)).await.unwrap();
    assert!(ratings.is_empty());

    services
        .catalog_commands
        .delete_genre(&as_owner, genre.id)
        .await
        .unwrap();
    services
        .catalog_commands
        .delete_casting(&as_owner, casting.id)
        .await
        .unwrap();
    let as_cleanup = actor(i64::MAX, Role::Admin);
    for id in [fan.id, owner.id] {
        services
            .user_commands
            .delete_user(&as_cleanup, DeleteUserCommand { user_id: id })
            .await
            .unwrap();
    }
}

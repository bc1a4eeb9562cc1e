// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            catalog::CatalogCommandService,
            films::FilmCommandService,
            media::MediaCommandService,
            relations::RelationCommandService,
            reviews::ReviewCommandService,
            users::{PasswordResetSettings, UserCommandService},
        },
        ports::{
            mail::Mailer,
            security::{PasswordHasher, TokenManager},
            storage::MediaStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            catalog::CatalogQueryService, films::FilmQueryService,
            relations::RelationQueryService, reviews::ReviewQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        casting::CastingRepository,
        film::{FilmRepository, FilmSlugService},
        genre::GenreRepository,
        password_reset::PasswordResetRepository,
        relation::RelationRepository,
        review::ReviewRepository,
        user::UserRepository,
    },
};

/// Repositories backing the use cases.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub password_resets: Arc<dyn PasswordResetRepository>,
    pub films: Arc<dyn FilmRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub castings: Arc<dyn CastingRepository>,
    pub relations: Arc<dyn RelationRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

/// Adapters for everything outside the process boundary.
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub mailer: Arc<dyn Mailer>,
    pub media_storage: Arc<dyn MediaStorage>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub film_commands: Arc<FilmCommandService>,
    pub film_queries: Arc<FilmQueryService>,
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub relation_commands: Arc<RelationCommandService>,
    pub relation_queries: Arc<RelationQueryService>,
    pub review_commands: Arc<ReviewCommandService>,
    pub review_queries: Arc<ReviewQueryService>,
    pub media_commands: Arc<MediaCommandService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        adapters: Adapters,
        reset_settings: PasswordResetSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.password_resets),
            Arc::clone(&adapters.password_hasher),
            Arc::clone(&adapters.token_manager),
            Arc::clone(&adapters.mailer),
            Arc::clone(&adapters.clock),
            reset_settings,
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&adapters.clock),
        ));

        let slug_service = Arc::new(FilmSlugService::new(
            Arc::clone(&repos.films),
            Arc::clone(&adapters.slugger),
        ));
        let film_commands = Arc::new(FilmCommandService::new(
            Arc::clone(&repos.films),
            Arc::clone(&repos.genres),
            Arc::clone(&repos.castings),
            slug_service,
            Arc::clone(&adapters.clock),
        ));
        let film_queries = Arc::new(FilmQueryService::new(
            Arc::clone(&repos.films),
            Arc::clone(&repos.relations),
            Arc::clone(&repos.reviews),
        ));

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&repos.genres),
            Arc::clone(&repos.castings),
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&repos.genres),
            Arc::clone(&repos.castings),
        ));

        let relation_commands = Arc::new(RelationCommandService::new(
            Arc::clone(&repos.films),
            Arc::clone(&repos.genres),
            Arc::clone(&repos.castings),
            Arc::clone(&repos.relations),
        ));
        let relation_queries = Arc::new(RelationQueryService::new(Arc::clone(&repos.relations)));

        let review_commands = Arc::new(ReviewCommandService::new(
            Arc::clone(&repos.films),
            Arc::clone(&repos.reviews),
            Arc::clone(&adapters.clock),
        ));
        let review_queries = Arc::new(ReviewQueryService::new(Arc::clone(&repos.reviews)));

        let media_commands = Arc::new(MediaCommandService::new(Arc::clone(
            &adapters.media_storage,
        )));

        Self {
            user_commands,
            user_queries,
            film_commands,
            film_queries,
            catalog_commands,
            catalog_queries,
            relation_commands,
            relation_queries,
            review_commands,
            review_queries,
            media_commands,
            token_manager: adapters.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verifies a raw bearer credential and returns the principal it names.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<crate::application::dto::AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}

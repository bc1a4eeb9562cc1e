// tests/support/mocks/memory.rs
//! In-memory stand-in for the Postgres schema: same uniqueness rules, same cascades,
//! same error messages as `map_sqlx` produces.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eijafilm::application::services::Repositories;
use eijafilm::domain::{
    casting::{Casting, CastingId, CastingRepository, NewCasting},
    errors::{DomainError, DomainResult},
    film::{Film, FilmId, FilmLinks, FilmRepository, FilmSlug, NewFilm},
    genre::{Genre, GenreId, GenreName, GenreRepository},
    password_reset::{NewPasswordReset, PasswordReset, PasswordResetRepository},
    relation::{
        CastingAssignment, CastingLineup, CastingPlan, CastingRelation, CastingRelationDetail,
        CastingRelationId, CastingRole, GenreRelation, GenreRelationDetail, GenreRelationId,
        GenreSelection, RelationRepository,
    },
    review::{
        Comment, CommentAuthor, CommentContent, CommentEntry, CommentId, NewComment, NewRating,
        Rating, RatingId, RatingSample, ReviewRepository, Score,
    },
    user::{Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate},
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Tables {
    sequences: HashMap<&'static str, i64>,
    users: BTreeMap<i64, User>,
    films: BTreeMap<i64, Film>,
    genres: BTreeMap<i64, Genre>,
    castings: BTreeMap<i64, Casting>,
    genre_relations: BTreeMap<i64, GenreRelation>,
    casting_relations: BTreeMap<i64, CastingRelation>,
    comments: BTreeMap<i64, Comment>,
    ratings: BTreeMap<i64, Rating>,
    resets: BTreeMap<i64, PasswordReset>,
}

fn not_found(what: &str) -> DomainError {
    DomainError::NotFound(format!("{what} not found"))
}

impl Tables {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let seq = self.sequences.entry(table).or_insert(0);
        *seq += 1;
        *seq
    }

    fn require_film(&self, id: FilmId) -> DomainResult<()> {
        if self.films.contains_key(&id.0) {
            Ok(())
        } else {
            Err(not_found("film"))
        }
    }

    fn insert_genre_link(&mut self, film_id: FilmId, genre_id: GenreId) -> DomainResult<GenreRelation> {
        self.require_film(film_id)?;
        if !self.genres.contains_key(&genre_id.0) {
            return Err(not_found("genre"));
        }
        if self
            .genre_relations
            .values()
            .any(|rel| rel.film_id == film_id && rel.genre_id == genre_id)
        {
            return Err(DomainError::Conflict("film already has this genre".into()));
        }
        let relation = GenreRelation {
            id: GenreRelationId(self.next_id("genre_relations")),
            film_id,
            genre_id,
        };
        self.genre_relations.insert(relation.id.0, relation.clone());
        Ok(relation)
    }

    fn insert_casting_link(
        &mut self,
        film_id: FilmId,
        assignment: &CastingAssignment,
    ) -> DomainResult<CastingRelation> {
        self.require_film(film_id)?;
        if !self.castings.contains_key(&assignment.casting_id.0) {
            return Err(not_found("casting"));
        }
        if self
            .casting_relations
            .values()
            .any(|rel| rel.film_id == film_id && rel.casting_id == assignment.casting_id)
        {
            return Err(DomainError::Conflict(
                "cast member is already linked to this film".into(),
            ));
        }
        let relation = CastingRelation {
            id: CastingRelationId(self.next_id("casting_relations")),
            film_id,
            casting_id: assignment.casting_id,
            role: assignment.role.clone(),
        };
        self.casting_relations.insert(relation.id.0, relation.clone());
        Ok(relation)
    }

    fn apply_photo_overrides(&mut self, lineup: &CastingLineup) {
        for (casting_id, photo) in lineup.photo_overrides() {
            if let Some(casting) = self.castings.get_mut(&casting_id.0) {
                casting.photo = Some(photo);
            }
        }
    }

    fn casting_relations_of(&self, film_id: FilmId) -> Vec<CastingRelation> {
        self.casting_relations
            .values()
            .filter(|rel| rel.film_id == film_id)
            .cloned()
            .collect()
    }

    /// Removes the given comments, every reply below them, and the ratings hanging off
    /// any removed comment.
    fn remove_threads(&mut self, roots: impl IntoIterator<Item = i64>) {
        let mut doomed: HashSet<i64> = roots.into_iter().collect();
        loop {
            let before = doomed.len();
            let replies: Vec<i64> = self
                .comments
                .values()
                .filter(|c| c.reply_to.is_some_and(|parent| doomed.contains(&parent.0)))
                .map(|c| c.id.0)
                .collect();
            doomed.extend(replies);
            if doomed.len() == before {
                break;
            }
        }
        self.ratings
            .retain(|_, r| !r.comment_id.is_some_and(|c| doomed.contains(&c.0)));
        self.comments.retain(|id, _| !doomed.contains(id));
    }

    fn insert_rating_row(
        &mut self,
        user_id: UserId,
        film_id: FilmId,
        score: Score,
        comment_id: CommentId,
    ) -> DomainResult<Rating> {
        if self
            .ratings
            .values()
            .any(|r| r.user_id == user_id && r.film_id == film_id)
        {
            return Err(DomainError::Conflict("you have already rated this film".into()));
        }
        let rating = Rating {
            id: RatingId(self.next_id("ratings")),
            user_id,
            film_id,
            score,
            comment_id: Some(comment_id),
        };
        self.ratings.insert(rating.id.0, rating.clone());
        Ok(rating)
    }
}

/// Every repository port over one shared set of tables.
#[derive(Clone, Default)]
pub struct MemoryDb {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            users: Arc::new(self.clone()),
            password_resets: Arc::new(self.clone()),
            films: Arc::new(self.clone()),
            genres: Arc::new(self.clone()),
            castings: Arc::new(self.clone()),
            relations: Arc::new(self.clone()),
            reviews: Arc::new(self.clone()),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> T {
        f(&self.tables.lock().unwrap())
    }

    /// Runs `f` against a scratch copy and keeps the result only on success.
    fn transact<T>(&self, f: impl FnOnce(&mut Tables) -> DomainResult<T>) -> DomainResult<T> {
        let mut guard = self.tables.lock().unwrap();
        let mut scratch = guard.clone();
        let out = f(&mut scratch)?;
        *guard = scratch;
        Ok(out)
    }

    pub fn user_count(&self) -> usize {
        self.read(|t| t.users.len())
    }

    pub fn comment_count(&self) -> usize {
        self.read(|t| t.comments.len())
    }

    pub fn rating_count(&self) -> usize {
        self.read(|t| t.ratings.len())
    }

    pub fn reset_grants(&self) -> Vec<PasswordReset> {
        self.read(|t| t.resets.values().cloned().collect())
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.read(|t| t.users.len() as u64))
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.transact(|t| {
            if t.users.values().any(|u| u.email == new_user.email) {
                return Err(DomainError::Conflict("email is already registered".into()));
            }
            let user = User {
                id: UserId(t.next_id("users")),
                name: new_user.name,
                email: new_user.email,
                password_hash: new_user.password_hash,
                role: new_user.role,
                is_active: new_user.is_active,
                image: new_user.image,
                created_at: new_user.created_at,
            };
            t.users.insert(user.id.0, user.clone());
            Ok(user)
        })
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self.read(|t| t.users.values().find(|u| &u.email == email).cloned()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.read(|t| t.users.get(&id.0).cloned()))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.read(|t| t.users.values().cloned().collect()))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        self.transact(|t| {
            if let Some(email) = &update.email
                && t.users.values().any(|u| &u.email == email && u.id != update.id)
            {
                return Err(DomainError::Conflict("email is already registered".into()));
            }
            let user = t
                .users
                .get_mut(&update.id.0)
                .ok_or_else(|| not_found("user"))?;
            if let Some(name) = update.name {
                user.name = name;
            }
            if let Some(email) = update.email {
                user.email = email;
            }
            if let Some(image) = update.image {
                user.image = image;
            }
            if let Some(is_active) = update.is_active {
                user.is_active = is_active;
            }
            if let Some(role) = update.role {
                user.role = role;
            }
            if let Some(password_hash) = update.password_hash {
                user.password_hash = password_hash;
            }
            Ok(user.clone())
        })
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.transact(|t| {
            if !t.users.contains_key(&id.0) {
                return Err(not_found("user"));
            }
            if t.films.values().any(|f| f.owner_id == id) {
                return Err(DomainError::Conflict(
                    "the account still owns films; delete or reassign them first".into(),
                ));
            }
            t.ratings.retain(|_, r| r.user_id != id);
            let authored: Vec<i64> = t
                .comments
                .values()
                .filter(|c| c.user_id == id)
                .map(|c| c.id.0)
                .collect();
            t.remove_threads(authored);
            t.resets.retain(|_, r| r.user_id != id);
            t.users.remove(&id.0);
            Ok(())
        })
    }
}

#[async_trait]
impl PasswordResetRepository for MemoryDb {
    async fn issue(&self, reset: NewPasswordReset) -> DomainResult<PasswordReset> {
        self.transact(|t| {
            for grant in t.resets.values_mut() {
                if grant.user_id == reset.user_id {
                    grant.used = true;
                }
            }
            let grant = PasswordReset {
                id: t.next_id("password_resets"),
                user_id: reset.user_id,
                token_hash: reset.token_hash,
                expires_at: reset.expires_at,
                used: false,
                created_at: reset.created_at,
            };
            t.resets.insert(grant.id, grant.clone());
            Ok(grant)
        })
    }

    async fn redeem(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
        password_hash: PasswordHash,
    ) -> DomainResult<UserId> {
        self.transact(|t| {
            let grant = t
                .resets
                .values_mut()
                .find(|g| g.token_hash == token_hash && g.is_redeemable(now))
                .ok_or_else(|| {
                    DomainError::NotFound("reset token is invalid or expired".into())
                })?;
            grant.used = true;
            let user_id = grant.user_id;
            let user = t.users.get_mut(&user_id.0).ok_or_else(|| not_found("user"))?;
            user.password_hash = password_hash;
            Ok(user_id)
        })
    }
}

#[async_trait]
impl FilmRepository for MemoryDb {
    async fn insert(&self, film: NewFilm, links: FilmLinks) -> DomainResult<Film> {
        self.transact(|t| {
            if t.films.values().any(|f| f.slug == film.slug) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
            if !t.users.contains_key(&film.owner_id.0) {
                return Err(DomainError::NotFound("referenced record not found".into()));
            }
            let stored = Film {
                id: FilmId(t.next_id("films")),
                title: film.title,
                slug: film.slug,
                description: film.description,
                poster_url: film.poster_url,
                trailer_url: film.trailer_url,
                duration: film.duration,
                release_year: film.release_year,
                category: film.category,
                episode: film.episode,
                owner_id: film.owner_id,
                created_at: film.created_at,
            };
            t.films.insert(stored.id.0, stored.clone());
            for genre_id in links.genres.as_slice() {
                t.insert_genre_link(stored.id, *genre_id)?;
            }
            for assignment in links.castings.assignments() {
                t.insert_casting_link(stored.id, assignment)?;
            }
            t.apply_photo_overrides(&links.castings);
            Ok(stored)
        })
    }

    async fn update(&self, film: &Film) -> DomainResult<Film> {
        self.transact(|t| {
            let stored = t.films.get_mut(&film.id.0).ok_or_else(|| not_found("film"))?;
            let slug = stored.slug.clone();
            *stored = Film {
                slug,
                ..film.clone()
            };
            Ok(stored.clone())
        })
    }

    async fn delete(&self, id: FilmId) -> DomainResult<()> {
        self.transact(|t| {
            if t.films.remove(&id.0).is_none() {
                return Err(not_found("film"));
            }
            t.ratings.retain(|_, r| r.film_id != id);
            t.comments.retain(|_, c| c.film_id != id);
            t.genre_relations.retain(|_, r| r.film_id != id);
            t.casting_relations.retain(|_, r| r.film_id != id);
            Ok(())
        })
    }

    async fn find_by_id(&self, id: FilmId) -> DomainResult<Option<Film>> {
        Ok(self.read(|t| t.films.get(&id.0).cloned()))
    }

    async fn find_by_slug(&self, slug: &FilmSlug) -> DomainResult<Option<Film>> {
        Ok(self.read(|t| t.films.values().find(|f| &f.slug == slug).cloned()))
    }

    async fn list(&self) -> DomainResult<Vec<Film>> {
        let mut films: Vec<Film> = self.read(|t| t.films.values().cloned().collect());
        films.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(films)
    }
}

#[async_trait]
impl GenreRepository for MemoryDb {
    async fn insert(&self, name: GenreName) -> DomainResult<Genre> {
        self.transact(|t| {
            let genre = Genre {
                id: GenreId(t.next_id("genres")),
                name,
            };
            t.genres.insert(genre.id.0, genre.clone());
            Ok(genre)
        })
    }

    async fn find_by_id(&self, id: GenreId) -> DomainResult<Option<Genre>> {
        Ok(self.read(|t| t.genres.get(&id.0).cloned()))
    }

    async fn list(&self) -> DomainResult<Vec<Genre>> {
        let mut genres: Vec<Genre> = self.read(|t| t.genres.values().cloned().collect());
        genres.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()).then(a.id.cmp(&b.id)));
        Ok(genres)
    }

    async fn existing_ids(&self, ids: &[GenreId]) -> DomainResult<Vec<GenreId>> {
        Ok(self.read(|t| {
            ids.iter()
                .copied()
                .filter(|id| t.genres.contains_key(&id.0))
                .collect()
        }))
    }

    async fn rename(&self, id: GenreId, name: GenreName) -> DomainResult<Genre> {
        self.transact(|t| {
            let genre = t.genres.get_mut(&id.0).ok_or_else(|| not_found("genre"))?;
            genre.name = name;
            Ok(genre.clone())
        })
    }

    async fn delete(&self, id: GenreId) -> DomainResult<()> {
        self.transact(|t| {
            if t.genres.remove(&id.0).is_none() {
                return Err(not_found("genre"));
            }
            t.genre_relations.retain(|_, r| r.genre_id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl CastingRepository for MemoryDb {
    async fn insert(&self, casting: NewCasting) -> DomainResult<Casting> {
        self.transact(|t| {
            let stored = Casting {
                id: CastingId(t.next_id("castings")),
                real_name: casting.real_name,
                stage_name: casting.stage_name,
                photo: casting.photo,
            };
            t.castings.insert(stored.id.0, stored.clone());
            Ok(stored)
        })
    }

    async fn find_by_id(&self, id: CastingId) -> DomainResult<Option<Casting>> {
        Ok(self.read(|t| t.castings.get(&id.0).cloned()))
    }

    async fn list(&self) -> DomainResult<Vec<Casting>> {
        let mut castings: Vec<Casting> = self.read(|t| t.castings.values().cloned().collect());
        castings.sort_by(|a, b| {
            a.stage_name
                .as_str()
                .cmp(b.stage_name.as_str())
                .then(a.id.cmp(&b.id))
        });
        Ok(castings)
    }

    async fn existing_ids(&self, ids: &[CastingId]) -> DomainResult<Vec<CastingId>> {
        Ok(self.read(|t| {
            ids.iter()
                .copied()
                .filter(|id| t.castings.contains_key(&id.0))
                .collect()
        }))
    }

    async fn update(&self, casting: &Casting) -> DomainResult<Casting> {
        self.transact(|t| {
            let stored = t
                .castings
                .get_mut(&casting.id.0)
                .ok_or_else(|| not_found("casting"))?;
            *stored = casting.clone();
            Ok(stored.clone())
        })
    }

    async fn delete(&self, id: CastingId) -> DomainResult<()> {
        self.transact(|t| {
            if t.castings.remove(&id.0).is_none() {
                return Err(not_found("casting"));
            }
            t.casting_relations.retain(|_, r| r.casting_id != id);
            Ok(())
        })
    }
}

#[async_trait]
impl RelationRepository for MemoryDb {
    async fn list_genre_relations(
        &self,
        film_id: Option<FilmId>,
    ) -> DomainResult<Vec<GenreRelationDetail>> {
        let mut rows: Vec<GenreRelationDetail> = self.read(|t| {
            t.genre_relations
                .values()
                .filter(|rel| film_id.is_none_or(|film| rel.film_id == film))
                .filter_map(|rel| {
                    t.genres.get(&rel.genre_id.0).map(|genre| GenreRelationDetail {
                        relation: rel.clone(),
                        genre: genre.clone(),
                    })
                })
                .collect()
        });
        rows.sort_by_key(|row| (row.relation.film_id.0, row.relation.id.0));
        Ok(rows)
    }

    async fn create_genre_relations(
        &self,
        pairs: Vec<(FilmId, GenreId)>,
    ) -> DomainResult<Vec<GenreRelation>> {
        self.transact(|t| {
            pairs
                .into_iter()
                .map(|(film_id, genre_id)| t.insert_genre_link(film_id, genre_id))
                .collect()
        })
    }

    async fn replace_genres(
        &self,
        film_id: FilmId,
        genres: &GenreSelection,
    ) -> DomainResult<Vec<GenreRelation>> {
        self.transact(|t| {
            t.require_film(film_id)?;
            let existing: Vec<GenreId> = t.genres.values().map(|g| g.id).collect();
            genres.ensure_all_exist(&existing)?;
            t.genre_relations.retain(|_, r| r.film_id != film_id);
            genres
                .as_slice()
                .iter()
                .map(|genre_id| t.insert_genre_link(film_id, *genre_id))
                .collect()
        })
    }

    async fn list_casting_relations(
        &self,
        film_id: Option<FilmId>,
    ) -> DomainResult<Vec<CastingRelationDetail>> {
        let mut rows: Vec<CastingRelationDetail> = self.read(|t| {
            t.casting_relations
                .values()
                .filter(|rel| film_id.is_none_or(|film| rel.film_id == film))
                .filter_map(|rel| {
                    t.castings
                        .get(&rel.casting_id.0)
                        .map(|casting| CastingRelationDetail {
                            relation: rel.clone(),
                            casting: casting.clone(),
                        })
                })
                .collect()
        });
        rows.sort_by_key(|row| (row.relation.film_id.0, row.relation.id.0));
        Ok(rows)
    }

    async fn find_casting_relation(
        &self,
        id: CastingRelationId,
    ) -> DomainResult<Option<CastingRelation>> {
        Ok(self.read(|t| t.casting_relations.get(&id.0).cloned()))
    }

    async fn create_casting_relation(
        &self,
        film_id: FilmId,
        assignment: CastingAssignment,
    ) -> DomainResult<CastingRelation> {
        self.transact(|t| t.insert_casting_link(film_id, &assignment))
    }

    async fn update_casting_role(
        &self,
        id: CastingRelationId,
        role: CastingRole,
    ) -> DomainResult<CastingRelation> {
        self.transact(|t| {
            let relation = t
                .casting_relations
                .get_mut(&id.0)
                .ok_or_else(|| not_found("casting relation"))?;
            relation.role = role;
            Ok(relation.clone())
        })
    }

    async fn delete_casting_relation(&self, id: CastingRelationId) -> DomainResult<()> {
        self.transact(|t| {
            t.casting_relations
                .remove(&id.0)
                .map(|_| ())
                .ok_or_else(|| not_found("casting relation"))
        })
    }

    async fn sync_castings(
        &self,
        film_id: FilmId,
        lineup: &CastingLineup,
    ) -> DomainResult<Vec<CastingRelation>> {
        self.transact(|t| {
            t.require_film(film_id)?;
            let plan = CastingPlan::diff(&t.casting_relations_of(film_id), lineup);
            for id in &plan.delete {
                t.casting_relations.remove(&id.0);
            }
            for (id, role) in &plan.update_roles {
                if let Some(relation) = t.casting_relations.get_mut(&id.0) {
                    relation.role = role.clone();
                }
            }
            for assignment in &plan.create {
                t.insert_casting_link(film_id, assignment)?;
            }
            t.apply_photo_overrides(lineup);
            Ok(t.casting_relations_of(film_id))
        })
    }
}

#[async_trait]
impl ReviewRepository for MemoryDb {
    async fn find_comment(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.read(|t| t.comments.get(&id.0).cloned()))
    }

    async fn find_top_level_comment(
        &self,
        user_id: UserId,
        film_id: FilmId,
    ) -> DomainResult<Option<Comment>> {
        Ok(self.read(|t| {
            t.comments
                .values()
                .find(|c| c.user_id == user_id && c.film_id == film_id && !c.is_reply())
                .cloned()
        }))
    }

    async fn insert_comment(
        &self,
        comment: NewComment,
        score: Option<Score>,
    ) -> DomainResult<(Comment, Option<Rating>)> {
        self.transact(|t| {
            t.require_film(comment.film_id)?;
            if let Some(parent) = comment.reply_to
                && !t.comments.contains_key(&parent.0)
            {
                return Err(not_found("comment"));
            }
            if !comment.is_reply()
                && t.comments.values().any(|c| {
                    c.user_id == comment.user_id && c.film_id == comment.film_id && !c.is_reply()
                })
            {
                return Err(DomainError::Conflict(
                    "you have already commented on this film".into(),
                ));
            }
            let stored = Comment {
                id: CommentId(t.next_id("comments")),
                user_id: comment.user_id,
                film_id: comment.film_id,
                content: comment.content,
                reply_to: comment.reply_to,
                created_at: comment.created_at,
            };
            t.comments.insert(stored.id.0, stored.clone());
            let rating = score
                .map(|score| t.insert_rating_row(stored.user_id, stored.film_id, score, stored.id))
                .transpose()?;
            Ok((stored, rating))
        })
    }

    async fn update_comment(
        &self,
        id: CommentId,
        content: CommentContent,
    ) -> DomainResult<Comment> {
        self.transact(|t| {
            let comment = t.comments.get_mut(&id.0).ok_or_else(|| not_found("comment"))?;
            comment.content = content;
            Ok(comment.clone())
        })
    }

    async fn delete_comment(&self, id: CommentId) -> DomainResult<()> {
        self.transact(|t| {
            if !t.comments.contains_key(&id.0) {
                return Err(not_found("comment"));
            }
            t.remove_threads([id.0]);
            Ok(())
        })
    }

    async fn list_comments(&self, film_id: Option<FilmId>) -> DomainResult<Vec<CommentEntry>> {
        let mut entries: Vec<CommentEntry> = self.read(|t| {
            t.comments
                .values()
                .filter(|c| film_id.is_none_or(|film| c.film_id == film))
                .filter_map(|c| {
                    let author = t.users.get(&c.user_id.0)?;
                    Some(CommentEntry {
                        comment: c.clone(),
                        author: CommentAuthor {
                            id: author.id,
                            name: author.name.as_str().to_string(),
                            image: author.image.clone(),
                            role: author.role,
                        },
                        rating: t
                            .ratings
                            .values()
                            .find(|r| r.comment_id == Some(c.id))
                            .cloned(),
                    })
                })
                .collect()
        });
        entries.sort_by(|a, b| {
            a.comment
                .created_at
                .cmp(&b.comment.created_at)
                .then(a.comment.id.0.cmp(&b.comment.id.0))
        });
        Ok(entries)
    }

    async fn find_rating(&self, id: RatingId) -> DomainResult<Option<Rating>> {
        Ok(self.read(|t| t.ratings.get(&id.0).cloned()))
    }

    async fn find_rating_for(
        &self,
        user_id: UserId,
        film_id: FilmId,
    ) -> DomainResult<Option<Rating>> {
        Ok(self.read(|t| {
            t.ratings
                .values()
                .find(|r| r.user_id == user_id && r.film_id == film_id)
                .cloned()
        }))
    }

    async fn insert_rating(&self, rating: NewRating) -> DomainResult<Rating> {
        self.transact(|t| {
            t.require_film(rating.film_id)?;
            if !t.comments.contains_key(&rating.comment_id.0) {
                return Err(DomainError::NotFound("referenced record not found".into()));
            }
            t.insert_rating_row(rating.user_id, rating.film_id, rating.score, rating.comment_id)
        })
    }

    async fn update_rating(&self, id: RatingId, score: Score) -> DomainResult<Rating> {
        self.transact(|t| {
            let rating = t.ratings.get_mut(&id.0).ok_or_else(|| not_found("rating"))?;
            rating.score = score;
            Ok(rating.clone())
        })
    }

    async fn delete_rating(&self, id: RatingId) -> DomainResult<()> {
        self.transact(|t| {
            t.ratings
                .remove(&id.0)
                .map(|_| ())
                .ok_or_else(|| not_found("rating"))
        })
    }

    async fn list_ratings(&self, film_id: Option<FilmId>) -> DomainResult<Vec<Rating>> {
        Ok(self.read(|t| {
            t.ratings
                .values()
                .filter(|r| film_id.is_none_or(|film| r.film_id == film))
                .cloned()
                .collect()
        }))
    }

    async fn rating_samples(&self, film_id: FilmId) -> DomainResult<Vec<RatingSample>> {
        Ok(self.read(|t| {
            t.ratings
                .values()
                .filter(|r| r.film_id == film_id)
                .filter_map(|r| {
                    t.users.get(&r.user_id.0).map(|u| RatingSample {
                        score: r.score,
                        author_role: u.role,
                    })
                })
                .collect()
        }))
    }
}

use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_FILM_SLUG: &str = "films_slug_key";
const CNT_FILM_OWNER: &str = "films_user_id_fkey";
const CNT_FILM_EPISODE: &str = "films_episode_chk";
const CNT_GENRE_RELATION_PAIR: &str = "genre_relations_film_genre_key";
const CNT_GENRE_RELATION_FILM: &str = "genre_relations_film_id_fkey";
const CNT_GENRE_RELATION_GENRE: &str = "genre_relations_genre_id_fkey";
const CNT_CASTING_RELATION_PAIR: &str = "casting_relations_film_casting_key";
const CNT_CASTING_RELATION_FILM: &str = "casting_relations_film_id_fkey";
const CNT_CASTING_RELATION_CASTING: &str = "casting_relations_casting_id_fkey";
const CNT_COMMENT_TOP_LEVEL: &str = "comments_one_top_level_per_user_film";
const CNT_COMMENT_FILM: &str = "comments_film_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_reply_to_comment_id_fkey";
const CNT_RATING_PAIR: &str = "ratings_user_film_key";
const CNT_RATING_SCORE: &str = "ratings_score_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email is already registered".into()),
                    CNT_FILM_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_FILM_OWNER => DomainError::Conflict(
                        "the account still owns films; delete or reassign them first".into(),
                    ),
                    CNT_FILM_EPISODE => DomainError::Validation(
                        "episode count must be a positive integer for episodic categories".into(),
                    ),
                    CNT_GENRE_RELATION_PAIR => {
                        DomainError::Conflict("film already has this genre".into())
                    }
                    CNT_CASTING_RELATION_PAIR => {
                        DomainError::Conflict("cast member is already linked to this film".into())
                    }
                    CNT_COMMENT_TOP_LEVEL => {
                        DomainError::Conflict("you have already commented on this film".into())
                    }
                    CNT_RATING_PAIR => {
                        DomainError::Conflict("you have already rated this film".into())
                    }
                    CNT_RATING_SCORE => {
                        DomainError::Validation("score must be between 1 and 5".into())
                    }
                    CNT_GENRE_RELATION_FILM | CNT_CASTING_RELATION_FILM | CNT_COMMENT_FILM => {
                        DomainError::NotFound("film not found".into())
                    }
                    CNT_GENRE_RELATION_GENRE => DomainError::NotFound("genre not found".into()),
                    CNT_CASTING_RELATION_CASTING => {
                        DomainError::NotFound("casting not found".into())
                    }
                    CNT_COMMENT_PARENT => DomainError::NotFound("comment not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

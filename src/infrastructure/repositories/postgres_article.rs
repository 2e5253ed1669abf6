// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleSlug, ArticleTitle, ArticleUpdate, ListFilter,
    ListOptions, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Profile, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_ARTICLE: &str = "SELECT a.id, a.slug, a.title, a.description, a.body, \
     a.created_at, a.updated_at, \
     u.id AS author_id, u.username AS author_username, u.bio AS author_bio, \
     u.image AS author_image, \
     (SELECT count(*) FROM favorites f WHERE f.article_id = a.id) AS favorites_count \
     FROM articles a JOIN users u ON u.id = a.author_id";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: i64,
    author_username: String,
    author_bio: String,
    author_image: String,
    favorites_count: i64,
}

impl ArticleRow {
    fn into_article(self, tag_list: Vec<String>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            slug: ArticleSlug::new(self.slug)?,
            title: ArticleTitle::new(self.title)?,
            description: self.description,
            body: self.body,
            tag_list,
            author: Profile {
                id: UserId::new(self.author_id)?,
                username: Username::new(self.author_username)?,
                bio: self.author_bio,
                image: self.author_image,
            },
            favorites_count: u32::try_from(self.favorites_count).unwrap_or(u32::MAX),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl PostgresArticleRepository {
    async fn tags_for(&self, ids: &[i64]) -> DomainResult<HashMap<i64, Vec<String>>> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT at.article_id, t.name FROM article_tags at \
             JOIN tags t ON t.id = at.tag_id \
             WHERE at.article_id = ANY($1) ORDER BY t.name",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut map: HashMap<i64, Vec<String>> = HashMap::new();
        for (article_id, name) in rows {
            map.entry(article_id).or_default().push(name);
        }
        Ok(map)
    }

    async fn finish_row(&self, row: Option<ArticleRow>) -> DomainResult<Option<Article>> {
        match row {
            Some(row) => {
                let mut tags = self.tags_for(&[row.id]).await?;
                let tag_list = tags.remove(&row.id).unwrap_or_default();
                row.into_article(tag_list).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn assemble_page(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags = self.tags_for(&ids).await?;
        rows.into_iter()
            .map(|row| {
                let tag_list = tags.remove(&row.id).unwrap_or_default();
                row.into_article(tag_list)
            })
            .collect()
    }

    async fn replace_tags(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        article_id: i64,
        tag_list: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut **tx)
            .await?;

        if tag_list.is_empty() {
            return Ok(());
        }

        sqlx::query("INSERT INTO tags (name) SELECT unnest($1::text[]) ON CONFLICT (name) DO NOTHING")
            .bind(tag_list)
            .execute(&mut **tx)
            .await?;

        sqlx::query(
            "INSERT INTO article_tags (article_id, tag_id) \
             SELECT $1, t.id FROM tags t WHERE t.name = ANY($2)",
        )
        .bind(article_id)
        .bind(tag_list)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    fn push_page_bounds(builder: &mut QueryBuilder<'_, Postgres>, options: &ListOptions) {
        builder.push(" ORDER BY a.created_at DESC, a.id DESC");
        if options.limit > 0 {
            builder.push(" LIMIT ");
            builder.push_bind(options.limit);
        }
        if options.offset > 0 {
            builder.push(" OFFSET ");
            builder.push_bind(options.offset);
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (slug, title, description, body, author_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(article.slug.as_str())
        .bind(article.title.as_str())
        .bind(&article.description)
        .bind(&article.body)
        .bind(i64::from(article.author_id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        Self::replace_tags(&mut tx, id, &article.tag_list)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        self.find_by_id(ArticleId::new(id)?)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article not readable".into()))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let query = format!("{SELECT_ARTICLE} WHERE a.slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.finish_row(row).await
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let query = format!("{SELECT_ARTICLE} WHERE a.id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.finish_row(row).await
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let id = i64::from(update.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = now()");
        if let Some(title) = &update.title {
            builder.push(", title = ");
            builder.push_bind(title.as_str().to_owned());
        }
        if let Some(slug) = &update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.as_str().to_owned());
        }
        if let Some(description) = &update.description {
            builder.push(", description = ");
            builder.push_bind(description.clone());
        }
        if let Some(body) = &update.body {
            builder.push(", body = ");
            builder.push_bind(body.clone());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article"));
        }

        if let Some(tag_list) = &update.tag_list {
            Self::replace_tags(&mut tx, id, tag_list)
                .await
                .map_err(map_sqlx)?;
        }
        tx.commit().await.map_err(map_sqlx)?;

        self.find_by_id(update.id)
            .await?
            .ok_or_else(|| DomainError::not_found("article"))
    }

    async fn delete_by_slug(&self, slug: &ArticleSlug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article"));
        }
        Ok(())
    }

    async fn list(&self, options: &ListOptions) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLE);

        match options.filter() {
            ListFilter::Tag(tag) => {
                builder.push(
                    " WHERE EXISTS (SELECT 1 FROM article_tags at \
                     JOIN tags t ON t.id = at.tag_id \
                     WHERE at.article_id = a.id AND t.name = ",
                );
                builder.push_bind(tag);
                builder.push(")");
            }
            ListFilter::Author(author) => {
                builder.push(" WHERE u.username = ");
                builder.push_bind(author);
            }
            ListFilter::FavoritedBy(favorited_by) => {
                builder.push(
                    " WHERE EXISTS (SELECT 1 FROM favorites f \
                     JOIN users fu ON fu.id = f.user_id \
                     WHERE f.article_id = a.id AND fu.username = ",
                );
                builder.push_bind(favorited_by);
                builder.push(")");
            }
            ListFilter::None => {}
        }
        Self::push_page_bounds(&mut builder, options);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.assemble_page(rows).await
    }

    async fn feed(&self, options: &ListOptions) -> DomainResult<Vec<Article>> {
        // No viewer means no follow-set; the feed is empty by definition.
        let Some(viewer) = options.viewer else {
            return Ok(Vec::new());
        };

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLE);
        builder.push(
            " WHERE EXISTS (SELECT 1 FROM follows fo \
             WHERE fo.followee_id = a.author_id AND fo.follower_id = ",
        );
        builder.push_bind(i64::from(viewer));
        builder.push(")");
        Self::push_page_bounds(&mut builder, options);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        self.assemble_page(rows).await
    }

    async fn favorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(user))
        .bind(i64::from(article))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfavorite(&self, article: ArticleId, user: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user))
            .bind(i64::from(article))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("favorite"));
        }
        Ok(())
    }

    async fn favorited_map(
        &self,
        ids: &[ArticleId],
        viewer: UserId,
    ) -> DomainResult<HashMap<ArticleId, bool>> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
        let rows = sqlx::query_scalar::<_, i64>(
            "SELECT article_id FROM favorites WHERE user_id = $1 AND article_id = ANY($2)",
        )
        .bind(i64::from(viewer))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|id| Ok((ArticleId::new(id)?, true)))
            .collect()
    }

    async fn following_map(
        &self,
        viewer: UserId,
        authors: &[UserId],
    ) -> DomainResult<HashMap<UserId, bool>> {
        let raw_ids: Vec<i64> = authors.iter().map(|id| i64::from(*id)).collect();
        let rows = sqlx::query_scalar::<_, i64>(
            "SELECT followee_id FROM follows WHERE follower_id = $1 AND followee_id = ANY($2)",
        )
        .bind(i64::from(viewer))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|id| Ok((UserId::new(id)?, true)))
            .collect()
    }
}

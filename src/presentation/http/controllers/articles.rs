// src/presentation/http/controllers/articles.rs
use crate::application::dto::ArticleDto;
use crate::application::social::{ArticleDraft, ArticlePatch};
use crate::domain::article::ListOptions;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeViewer, RequireViewer};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub favorited: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleBody {
    pub article: CreateArticleFields,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleFields {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

/// Absent fields deserialize to their empty values, which the service
/// treats as "leave unchanged".
#[derive(Debug, Deserialize)]
pub struct UpdateArticleBody {
    pub article: UpdateArticleFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleDto>,
    pub articles_count: usize,
}

impl ArticlesResponse {
    fn new(articles: Vec<ArticleDto>) -> Self {
        Self {
            articles_count: articles.len(),
            articles,
        }
    }
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    MaybeViewer(viewer): MaybeViewer,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlesResponse>> {
    let mut options = ListOptions::new()
        .with_tag(params.tag)
        .with_author(params.author)
        .with_favorited_by(params.favorited)
        .with_limit(params.limit)
        .with_offset(params.offset);
    if let Some(viewer) = viewer {
        options = options.with_viewer(viewer.id);
    }

    state
        .services
        .social
        .list_articles(options)
        .await
        .into_http()
        .map(|articles| Json(ArticlesResponse::new(articles)))
}

pub async fn feed_articles(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Query(params): Query<FeedParams>,
) -> HttpResult<Json<ArticlesResponse>> {
    let options = ListOptions::new()
        .with_limit(params.limit)
        .with_offset(params.offset)
        .with_viewer(viewer.id);

    state
        .services
        .social
        .feed_articles(options)
        .await
        .into_http()
        .map(|articles| Json(ArticlesResponse::new(articles)))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .social
        .get_article(&slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Json(payload): Json<CreateArticleBody>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .social
        .create_article(
            viewer,
            ArticleDraft {
                title: payload.article.title,
                description: payload.article.description,
                body: payload.article.body,
                tag_list: payload.article.tag_list,
            },
        )
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleBody>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .social
        .update_article(
            viewer,
            &slug,
            ArticlePatch {
                title: payload.article.title,
                description: payload.article.description,
                body: payload.article.body,
                tag_list: payload.article.tag_list,
            },
        )
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .social
        .delete_article(viewer, &slug)
        .await
        .into_http()?;
    Ok(StatusCode::OK)
}

pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .social
        .favorite_article(viewer, &slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    RequireViewer(viewer): RequireViewer,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .social
        .unfavorite_article(viewer, &slug)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

use crate::models::Article;
use futures::TryStreamExt;
use mongodb::{
    bson::doc, options::IndexOptions, results::InsertOneResult, Client as MongoClient, Collection,
    Database, IndexModel,
};
use service_core::error::AppError;

/// Single shared handle to the article collection. All request handlers
/// clone this; the driver owns connection pooling, so no locking happens
/// at this layer.
#[derive(Clone)]
pub struct ArticleDb {
    client: MongoClient,
    db: Database,
}

impl ArticleDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Create the text index that backs `search`. Without it every `$text`
    /// query fails server-side.
    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for article-service");

        let articles = self.articles();

        let text_index = IndexModel::builder()
            .keys(doc! { "Title": "text", "Subtitle": "text", "Content": "text" })
            .options(
                IndexOptions::builder()
                    .name("article_text_search".to_string())
                    .build(),
            )
            .build();

        articles.create_index(text_index, None).await.map_err(|e| {
            tracing::error!(
                "Failed to create text index on articles collection: {}",
                e
            );
            AppError::from(e)
        })?;
        tracing::info!("Created text index on articles.(Title, Subtitle, Content)");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection("articles")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    /// Every document in the collection, in store-defined order.
    pub async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        let cursor = self
            .articles()
            .find(doc! {}, None)
            .await
            .map_err(AppError::from)?;
        cursor.try_collect().await.map_err(AppError::from)
    }

    /// First document whose `Id` field equals `id`.
    pub async fn find_by_id(&self, id: &str) -> Result<Article, AppError> {
        self.articles()
            .find_one(doc! { "Id": id }, None)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No article with Id {}", id)))
    }

    /// Free-text search over the indexed Title/Subtitle/Content fields.
    pub async fn search(&self, text: &str) -> Result<Vec<Article>, AppError> {
        let filter = doc! { "$text": { "$search": text } };
        let cursor = self
            .articles()
            .find(filter, None)
            .await
            .map_err(AppError::from)?;
        cursor.try_collect().await.map_err(AppError::from)
    }

    /// Persist the article as a new document. Duplicate `Id` values are
    /// not checked here; the store accepts them as configured.
    pub async fn insert(&self, article: &Article) -> Result<InsertOneResult, AppError> {
        self.articles()
            .insert_one(article, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert article: {}", e);
                AppError::from(e)
            })
    }
}

/// Informational banner for the root route; the only non-JSON response
/// this service produces.
pub async fn home() -> &'static str {
    concat!(
        "article-service ",
        env!("CARGO_PKG_VERSION"),
        "\n",
        "GET  /articles          list all articles\n",
        "POST /articles          create an article\n",
        "GET  /articles/{id}     fetch one article\n",
        "GET  /articles/search   free-text search (?q=...)\n",
    )
}

pub use super::article::Entity as Article;
pub use super::article_hashtag::Entity as ArticleHashtag;
pub use super::article_like::Entity as ArticleLike;
pub use super::article_subscribe::Entity as ArticleSubscribe;
pub use super::project::Entity as Project;
pub use super::project_like::Entity as ProjectLike;
pub use super::project_subscribe::Entity as ProjectSubscribe;
pub use super::user::Entity as User;

use crate::{CommentId, PostId, ReplyId, UserId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub image_count: u32,
    pub text_content: String,
    pub user: User,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComment {
    pub id: CommentId,
    pub content: String,
    pub user: User,
    pub number_of_replies: u32,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentReply {
    pub id: ReplyId,
    pub content: String,
    pub user: User,
    pub created_at: Timestamp,
}

/// Returned by the backend after a successful login or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_from_backend_json() {
        let json = r#"{
            "id": "p1",
            "image_count": 2,
            "text_content": "first!",
            "user": {
                "id": "u1",
                "username": "alice",
                "created_at": "2024-01-05T10:00:00Z"
            },
            "created_at": "2024-01-06T12:30:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId("p1".into()));
        assert_eq!(post.user.username, "alice");
        assert_eq!(post.user.id.to_string(), "u1");
        assert_eq!(
            post.created_at,
            "2024-01-06T12:30:00Z".parse::<Timestamp>().unwrap()
        );
    }
}

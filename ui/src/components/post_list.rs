use payloads::Post;
use yew::prelude::*;

use crate::components::TimestampDisplay;
use crate::utils::is_valid_link;
use crate::components::user_identity_display::{
    render_user_avatar, render_user_name,
};

#[derive(Properties, PartialEq)]
pub struct PostListProps {
    pub posts: Vec<Post>,
}

#[function_component]
pub fn PostList(props: &PostListProps) -> Html {
    if props.posts.is_empty() {
        return html! {
            <p class="text-center text-neutral-600 dark:text-neutral-400 py-8">
                {"nothing here yet."}
            </p>
        };
    }

    html! {
        <ul class="space-y-4">
            {for props.posts.iter().map(|post| html! {
                <li key={post.id.to_string()} class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <div class="flex items-center space-x-3 text-sm text-neutral-600 dark:text-neutral-400">
                        {render_user_avatar(&post.user)}
                        {render_user_name(&post.user)}
                        <TimestampDisplay timestamp={post.created_at} />
                    </div>
                    <p class="mt-2 whitespace-pre-wrap">{render_text(&post.text_content)}</p>
                    if post.image_count > 0 {
                        <p class="mt-1 text-xs text-neutral-500">
                            {format!("{} images", post.image_count)}
                        </p>
                    }
                </li>
            })}
        </ul>
    }
}

/// Post text with http(s) links made clickable.
fn render_text(text: &str) -> Html {
    let mut rest = text;
    let mut parts = Vec::new();

    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        let end = rest[start..]
            .find(char::is_whitespace)
            .map_or(rest.len(), |len| start + len);
        let word = &rest[start..end];

        parts.push(html! { {&rest[..start]} });
        if is_valid_link(word) {
            parts.push(html! {
                <a href={word.to_string()} target="_blank" rel="noopener noreferrer" class="underline">
                    {word}
                </a>
            });
        } else {
            parts.push(html! { {word} });
        }
        rest = &rest[end..];
    }
    parts.push(html! { {rest} });

    parts.into_iter().collect()
}

use gossip_shared::{ItemAction, Vote, VoteTarget};
use leptos::prelude::*;

/// Like or dislike button with its aggregate count.
///
/// Holds no state: the page re-reads the entity after the vote lands, so
/// highlight and count always reflect the server.
#[component]
pub fn VoteButton(
    target: VoteTarget,
    vote: Vote,
    count: i64,
    on_action: Callback<ItemAction>,
) -> impl IntoView {
    let active = target.current == Some(vote);
    let (icon, label) = match vote {
        // Unicode thumbs
        Vote::Like => ("\u{1F44D}", "like"),
        Vote::Dislike => ("\u{1F44E}", "dislike"),
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_action.run(ItemAction::Vote { target, vote });
    };

    view! {
        <button
            class="gossip-vote-btn"
            class:active=active
            aria-label=label
            on:click=on_click
        >
            <span>{icon}</span>
            <span class="gossip-vote-count">{count}</span>
        </button>
    }
}

/// The like/dislike pair shown on posts and comments.
#[component]
pub fn VoteBar(
    target: VoteTarget,
    likes: i64,
    dislikes: i64,
    on_action: Callback<ItemAction>,
) -> impl IntoView {
    view! {
        <div class="gossip-votes">
            <VoteButton target=target vote=Vote::Like count=likes on_action=on_action />
            <VoteButton target=target vote=Vote::Dislike count=dislikes on_action=on_action />
        </div>
    }
}

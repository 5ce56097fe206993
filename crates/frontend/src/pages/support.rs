use crate::data;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use chrono::Local;
use contracts::domain::support::{
    ChatMessage, MessageSender, ModificationStatus, Presence, ProfileModification, SupportChat,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chats,
    Modifications,
}

#[component]
pub fn SupportPage() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Chats);
    let (selected_chat, set_selected_chat) = signal(Option::<&'static SupportChat>::None);
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let draft = RwSignal::new(String::new());
    let modifications = RwSignal::new(data::support::modifications().to_vec());

    let select_chat = move |chat: &'static SupportChat| {
        set_selected_chat.set(Some(chat));
        messages.set(data::support::messages_for(&chat.id));
    };

    let send = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let timestamp = Local::now().format("%I:%M %p").to_string();
        messages.update(|all| {
            all.push(ChatMessage::new(MessageSender::Support, text, timestamp));
        });
        draft.set(String::new());
    };

    let resolve = move |id: String, status: ModificationStatus| {
        modifications.update(|all| {
            if let Some(m) = all.iter_mut().find(|m| m.id == id) {
                m.status = status;
            }
        });
    };

    view! {
        <div class="page page--support">
            <PageHeader title="Support" subtitle="Conversations and profile change requests">
                {()}
            </PageHeader>

            <div class="stats-row">
                {data::support::SUPPORT_KPIS
                    .iter()
                    .map(|(label, value, trend)| {
                        view! {
                            <StatCard
                                title=*label
                                value=*value
                                trend=*trend
                                icon_name="headphones"
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tabs">
                <button
                    class=move || {
                        if tab.get() == Tab::Chats { "tab tab--active" } else { "tab" }
                    }
                    on:click=move |_| set_tab.set(Tab::Chats)
                >
                    "Chats"
                </button>
                <button
                    class=move || {
                        if tab.get() == Tab::Modifications { "tab tab--active" } else { "tab" }
                    }
                    on:click=move |_| set_tab.set(Tab::Modifications)
                >
                    "Profile Modifications"
                </button>
            </div>

            {move || match tab.get() {
                Tab::Chats => {
                    view! {
                        <div class="support-chats">
                            <div class="chat-list">
                                {data::support::chats()
                                    .iter()
                                    .map(|chat| {
                                        let priority_class = format!(
                                            "pill pill--{}",
                                            chat.priority.color_token(),
                                        );
                                        let active = move || {
                                            selected_chat
                                                .get()
                                                .is_some_and(|c| c.id == chat.id)
                                        };
                                        view! {
                                            <div
                                                class=move || {
                                                    if active() {
                                                        "chat-list__item chat-list__item--active"
                                                    } else {
                                                        "chat-list__item"
                                                    }
                                                }
                                                on:click=move |_| select_chat(chat)
                                            >
                                                <div class="chat-list__avatar">
                                                    <img src=chat.user.avatar_url.clone() alt="" />
                                                    {(chat.user.presence == Presence::Online)
                                                        .then(|| {
                                                            view! {
                                                                <span class="chat-list__presence"></span>
                                                            }
                                                        })}
                                                </div>
                                                <div class="chat-list__body">
                                                    <div class="chat-list__head">
                                                        <span class="chat-list__name">
                                                            {chat.user.name.clone()}
                                                        </span>
                                                        <span class="chat-list__time">
                                                            {chat.timestamp.clone()}
                                                        </span>
                                                    </div>
                                                    <div class="chat-list__preview">
                                                        {chat.last_message.clone()}
                                                    </div>
                                                    <div class="chat-list__meta">
                                                        <span class=priority_class>
                                                            {chat.priority.display_name()}
                                                        </span>
                                                        {icon(chat.channel.icon_id())}
                                                        {(chat.unread_count > 0)
                                                            .then(|| {
                                                                view! {
                                                                    <span class="chat-list__unread">
                                                                        {chat.unread_count}
                                                                    </span>
                                                                }
                                                            })}
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="chat-window">
                                {move || match selected_chat.get() {
                                    None => {
                                        view! {
                                            <div class="chat-window__empty">
                                                {icon("message-circle")}
                                                <p>"Select a conversation"</p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    Some(chat) => {
                                        view! {
                                            <div class="chat-window__header">
                                                <img src=chat.user.avatar_url.clone() alt="" />
                                                <span>{chat.user.name.clone()}</span>
                                            </div>
                                            <div class="chat-window__messages">
                                                {move || {
                                                    messages
                                                        .get()
                                                        .into_iter()
                                                        .map(|message| {
                                                            let side = match message.sender {
                                                                MessageSender::User => "chat-message chat-message--user",
                                                                MessageSender::Support => {
                                                                    "chat-message chat-message--support"
                                                                }
                                                            };
                                                            view! {
                                                                <div class=side>
                                                                    <p>{message.content.clone()}</p>
                                                                    <span class="chat-message__time">
                                                                        {message.timestamp.clone()}
                                                                    </span>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()
                                                }}
                                            </div>
                                            <form class="chat-window__composer" on:submit=send>
                                                <input
                                                    type="text"
                                                    placeholder="Type a reply..."
                                                    prop:value=move || draft.get()
                                                    on:input=move |ev| {
                                                        draft.set(event_target_value(&ev))
                                                    }
                                                />
                                                <button class="btn btn--primary" type="submit">
                                                    {icon("send")}
                                                </button>
                                            </form>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Tab::Modifications => {
                    view! {
                        <div class="modification-list">
                            {move || {
                                modifications
                                    .get()
                                    .into_iter()
                                    .map(|m| modification_card(m, resolve))
                                    .collect_view()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

fn modification_card(
    m: ProfileModification,
    resolve: impl Fn(String, ModificationStatus) + Copy + 'static,
) -> impl IntoView {
    let status_class = format!("pill pill--{}", m.status.color_token());
    let approve_id = m.id.clone();
    let reject_id = m.id.clone();
    let pending = m.status == ModificationStatus::Pending;

    view! {
        <div class="modification-card">
            <div class="modification-card__head">
                <img src=m.user.avatar_url.clone() alt="" />
                <div>
                    <div class="modification-card__name">{m.user.name.clone()}</div>
                    <div class="modification-card__date">
                        {format!("Requested {}", m.request_date)}
                    </div>
                </div>
                <span class=status_class>{m.status.display_name()}</span>
            </div>
            <p class="modification-card__reason">{m.reason.clone()}</p>
            <div class="modification-card__changes">
                {m
                    .changes
                    .iter()
                    .map(|change| {
                        view! {
                            <div class="field-change">
                                <span class="field-change__field">{change.field.clone()}</span>
                                <span class="field-change__old">{change.old_value.clone()}</span>
                                {icon("arrow-right")}
                                <span class="field-change__new">{change.new_value.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {pending
                .then(|| {
                    view! {
                        <div class="modification-card__actions">
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    resolve(approve_id.clone(), ModificationStatus::Approved)
                                }
                            >
                                {icon("check")}
                                <span>"Approve"</span>
                            </button>
                            <button
                                class="btn btn--ghost"
                                on:click=move |_| {
                                    resolve(reject_id.clone(), ModificationStatus::Rejected)
                                }
                            >
                                {icon("x")}
                                <span>"Reject"</span>
                            </button>
                        </div>
                    }
                })}
        </div>
    }
}

//! WebSocket chat flow integration tests.
//!
//! Each test runs a real server on its own port and drives it with
//! tokio-tungstenite clients.

mod fixtures;

use fixtures::{CANNED_JOKE, TestServer, connect, join, recv_json, send_text};
use serde_json::json;

#[tokio::test]
async fn test_join_chat_leave_scenario() {
    // given:
    let server = TestServer::start(19090).await;

    // when: alice joins the lobby
    let mut alice = connect(&server, "lobby").await;
    send_text(&mut alice, r#"{"type": "join", "name": "alice"}"#).await;

    // then: she receives the join note herself
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "note", "text": "alice joined \"lobby\"."})
    );

    // when: bob joins the same room
    let mut bob = join(&server, "lobby", "bob").await;

    // then: alice is told
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "note", "text": "bob joined \"lobby\"."})
    );

    // when: alice chats
    send_text(&mut alice, r#"{"type": "chat", "text": "hi"}"#).await;

    // then: both receive the chat payload
    let expected = json!({"type": "chat", "name": "alice", "text": "hi"});
    assert_eq!(recv_json(&mut alice).await, expected);
    assert_eq!(recv_json(&mut bob).await, expected);

    // when: bob disconnects
    bob.close(None).await.expect("close failed");

    // then: alice hears about it
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "note", "text": "bob left lobby."})
    );
}

#[tokio::test]
async fn test_members_note_goes_to_requester_only() {
    // given:
    let server = TestServer::start(19091).await;
    let mut alice = join(&server, "lobby", "alice").await;
    let mut bob = join(&server, "lobby", "bob").await;
    recv_json(&mut alice).await; // bob's join note

    // when: alice asks for the member list, then chats
    send_text(&mut alice, r#"{"type": "members"}"#).await;
    send_text(&mut alice, r#"{"type": "chat", "text": "after"}"#).await;

    // then: alice gets the note; bob's next message is already the chat
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "note", "text": "In room: alice, bob"})
    );
    let chat = json!({"type": "chat", "name": "alice", "text": "after"});
    assert_eq!(recv_json(&mut alice).await, chat);
    assert_eq!(recv_json(&mut bob).await, chat);
}

#[tokio::test]
async fn test_private_message_delivery() {
    // given: three members
    let server = TestServer::start(19092).await;
    let mut alice = join(&server, "lobby", "alice").await;
    let mut bob = join(&server, "lobby", "bob").await;
    let mut charlie = join(&server, "lobby", "charlie").await;
    recv_json(&mut alice).await; // bob joined
    recv_json(&mut alice).await; // charlie joined
    recv_json(&mut bob).await; // charlie joined

    // when: alice whispers to bob, then chats publicly
    send_text(
        &mut alice,
        r#"{"type": "priv", "text": "priv bob hello there"}"#,
    )
    .await;
    send_text(&mut alice, r#"{"type": "chat", "text": "public"}"#).await;

    // then: the private payload reaches bob and echoes to alice
    let private = json!({"type": "chat", "name": "alice (private)", "text": " hello there"});
    assert_eq!(recv_json(&mut bob).await, private);
    assert_eq!(recv_json(&mut alice).await, private);

    // then: charlie's next message is the public chat, never the private one
    assert_eq!(
        recv_json(&mut charlie).await,
        json!({"type": "chat", "name": "alice", "text": "public"})
    );
}

#[tokio::test]
async fn test_joke_request_announces_then_delivers() {
    // given:
    let server = TestServer::start(19093).await;
    let mut alice = join(&server, "lobby", "alice").await;

    // when:
    send_text(&mut alice, r#"{"type": "joke"}"#).await;

    // then: the announcement comes first, the canned joke follows
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "note", "text": "alice requested a joke."})
    );
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "chat", "name": "Server", "text": CANNED_JOKE})
    );
}

#[tokio::test]
async fn test_bad_message_keeps_connection_open() {
    // given:
    let server = TestServer::start(19094).await;
    let mut alice = join(&server, "lobby", "alice").await;

    // when: an unknown type, then garbage, then a normal chat
    send_text(&mut alice, r#"{"type": "foo"}"#).await;
    send_text(&mut alice, "{{{{").await;
    send_text(&mut alice, r#"{"type": "chat", "text": "still here"}"#).await;

    // then: the bad messages were dropped and the chat still flows
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "chat", "name": "alice", "text": "still here"})
    );
}

#[tokio::test]
async fn test_rooms_are_independent() {
    // given: members of two different rooms
    let server = TestServer::start(19095).await;
    let mut alice = join(&server, "lobby", "alice").await;
    let mut dave = join(&server, "den", "dave").await;

    // when: alice chats in the lobby, dave in the den
    send_text(&mut alice, r#"{"type": "chat", "text": "lobby talk"}"#).await;
    send_text(&mut dave, r#"{"type": "chat", "text": "den talk"}"#).await;

    // then: each only sees their own room's traffic
    assert_eq!(
        recv_json(&mut alice).await,
        json!({"type": "chat", "name": "alice", "text": "lobby talk"})
    );
    assert_eq!(
        recv_json(&mut dave).await,
        json!({"type": "chat", "name": "dave", "text": "den talk"})
    );
}

#[tokio::test]
async fn test_invalid_room_name_rejected_before_upgrade() {
    // given:
    let server = TestServer::start(19096).await;

    // when: a room name over the length limit
    let room = "a".repeat(101);
    let result = tokio_tungstenite::connect_async(server.ws_url(&room)).await;

    // then: the upgrade is refused
    assert!(result.is_err());
}

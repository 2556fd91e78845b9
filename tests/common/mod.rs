//! Shared fixtures for the legality integration tests.
//!
//! Card builders for common deck shapes, an in-memory restriction client,
//! and a one-shot HTTP stub for exercising the real HTTP client.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use deck_legality::{
    CardLegalityInfo, LegalityError, RestrictedCard, RestrictionClient, RestrictionReport,
    Result,
};

// ---------------------------------------------------------------------------
// Card builders
// ---------------------------------------------------------------------------

pub fn card(name: &str, quantity: u32) -> CardLegalityInfo {
    CardLegalityInfo::new(
        format!("{}-id", name.to_lowercase().replace(' ', "-")),
        name,
        quantity,
    )
}

pub fn colored(name: &str, colors: &[&str]) -> CardLegalityInfo {
    card(name, 1)
        .with_type_line("Creature — Elf")
        .with_color_identity(colors)
}

pub fn legendary(name: &str, colors: &[&str]) -> CardLegalityInfo {
    card(name, 1)
        .with_type_line("Legendary Creature — Human Wizard")
        .with_color_identity(colors)
        .commander()
}

pub fn planeswalker(name: &str, colors: &[&str]) -> CardLegalityInfo {
    card(name, 1)
        .with_type_line("Legendary Planeswalker — Jace")
        .with_color_identity(colors)
        .commander()
}

pub fn signature_spell(name: &str, colors: &[&str]) -> CardLegalityInfo {
    card(name, 1)
        .with_type_line("Instant")
        .with_color_identity(colors)
        .commander()
}

/// A legal 100-card Commander deck: one Dimir commander, 60 basics and 39
/// blue or black singletons.
pub fn dimir_commander_deck() -> Vec<CardLegalityInfo> {
    let mut cards = vec![
        legendary("Tasigur, the Golden Fang", &["U", "B"]),
        card("Island", 30)
            .with_type_line("Basic Land — Island")
            .with_color_identity(&["U"]),
        card("Swamp", 30)
            .with_type_line("Basic Land — Swamp")
            .with_color_identity(&["B"]),
    ];
    for i in 0..39 {
        let color = if i % 2 == 0 { "U" } else { "B" };
        cards.push(colored(&format!("Dimir Card {i}"), &[color]));
    }
    cards
}

/// Sixty mainboard cards made of basics plus four-ofs.
pub fn sixty_card_deck() -> Vec<CardLegalityInfo> {
    vec![
        card("Lightning Bolt", 4).with_type_line("Instant"),
        card("Goblin Guide", 4).with_type_line("Creature — Goblin Scout"),
        card("Monastery Swiftspear", 4).with_type_line("Creature — Human Monk"),
        card("Mountain", 48).with_type_line("Basic Land — Mountain"),
    ]
}

// ---------------------------------------------------------------------------
// MockRestrictionClient
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub enum MockReply {
    Report(RestrictionReport),
    Status(u16),
    InvalidArgument(String),
}

/// Restriction client returning a canned reply and recording every lookup.
pub struct MockRestrictionClient {
    reply: MockReply,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockRestrictionClient {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn clean() -> Self {
        Self::new(MockReply::Report(RestrictionReport {
            is_legal: true,
            illegal_cards: Vec::new(),
        }))
    }

    pub fn flagging(cards: &[(&str, &str)]) -> Self {
        Self::new(MockReply::Report(RestrictionReport {
            is_legal: false,
            illegal_cards: cards
                .iter()
                .map(|(name, status)| RestrictedCard {
                    name: name.to_string(),
                    printing_id: None,
                    status: status.to_string(),
                })
                .collect(),
        }))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RestrictionClient for MockRestrictionClient {
    fn lookup(&self, deck_id: &str, format: &str) -> Result<RestrictionReport> {
        self.calls
            .lock()
            .unwrap()
            .push((deck_id.to_string(), format.to_string()));
        match &self.reply {
            MockReply::Report(report) => Ok(report.clone()),
            MockReply::Status(status) => Err(LegalityError::Status {
                status: *status,
                body: String::new(),
            }),
            MockReply::InvalidArgument(msg) => Err(LegalityError::InvalidArgument(msg.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// One-shot HTTP stub
// ---------------------------------------------------------------------------

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the base URL and a handle yielding the raw request head
/// (request line and headers) once the request has been answered.
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        head
    });

    (format!("http://{}/api", addr), handle)
}

/// Accept one connection and never answer it.
///
/// The connection is held open for `hold` before the stub gives up, which
/// lets callers check that their own timeout fires first.
pub fn serve_silently(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold);
            drop(stream);
        }
    });
    format!("http://{}/api", addr)
}

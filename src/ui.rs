//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Prompt, View};
use crate::catalog::Track;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{NoticeLevel, PlaybackState, PlayerStatus, format_time};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L is filled dynamically from config.
    map.insert("+/-", "volume");
    map.insert("m", "mute");
    map.insert("f", "favorite");
    map.insert("/", "search");
    map.insert("K", "karaoke");
    map.insert("v", "view");
    map.insert("g/d", "genre/difficulty");
    map.insert("N/B", "new playlist/library");
    map.insert("a/x", "add/remove");
    map.insert("s", "shuffle");
    map.insert("r", "repeat");
    map.insert("i", "info");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating seek seconds.
fn controls_text(seek_seconds: u64) -> String {
    let order = [
        "j/k", "h/l", "H/L", "enter", "space/p", "+/-", "m", "f", "/", "K", "v", "g/d", "N/B",
        "a/x", "s", "r", "i", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] seek -/+{seek_seconds}s"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_label(status: &PlayerStatus) -> String {
    match status {
        PlayerStatus::Idle => "Idle".to_string(),
        PlayerStatus::Loaded => "Loaded".to_string(),
        PlayerStatus::Playing => "Playing".to_string(),
        PlayerStatus::Paused => "Paused".to_string(),
        PlayerStatus::Ended => "Ended".to_string(),
        PlayerStatus::Error(e) => format!("Error ({})", e.category()),
    }
}

/// `elapsed / total`. Before the engine reports a duration the catalog hint
/// is shown, if any.
fn time_text(state: &PlaybackState) -> String {
    let elapsed = format_time(state.current_time);
    let hint = state
        .current
        .as_ref()
        .and_then(|t| t.duration_hint.as_deref());
    match (state.duration, hint) {
        (Some(d), _) => format!("{elapsed} / {}", format_time(d)),
        (None, Some(hint)) => format!("{elapsed} / {hint}"),
        (None, None) => format!("{elapsed} / {}", format_time(f64::NAN)),
    }
}

fn volume_text(state: &PlaybackState) -> String {
    if state.muted {
        "VOL: muted".to_string()
    } else {
        format!("VOL: {:.0}%", state.volume * 100.0)
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    playback: &PlaybackState,
    display: &[usize],
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" micfight ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!(" VIEW: {}", app.view_label()));

        if app.view == View::Karaoke {
            parts.push(format!(
                "GENRE: {}",
                app.filter.genre.as_deref().unwrap_or("all")
            ));
            parts.push(format!(
                "DIFFICULTY: {}",
                app.filter.difficulty.map(|d| d.label()).unwrap_or("all")
            ));
        }

        let q = app.search_query().trim();
        if app.prompt == Some(Prompt::Search) || !q.is_empty() {
            let mut search = String::from("SEARCH:");
            if !q.is_empty() {
                search.push(' ');
                search.push_str(q);
            }
            parts.push(search);
        }

        parts.push(format!("REPEAT: {}", playback.repeat.label()));
        parts.push(if playback.shuffle {
            "Shuffle: ON".to_string()
        } else {
            "Shuffle: OFF".to_string()
        });
        parts.push(volume_text(playback));

        match &playback.current {
            Some(track) => parts.push(format!(
                "Song: {} • {}",
                track.display(),
                status_label(&playback.status)
            )),
            None => parts.push(status_label(&playback.status)),
        }

        if !app.catalog_name.is_empty() {
            parts.push(format!("Catalog: {}", app.catalog_name));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(Block::bordered().padding(left_pad()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Progress
    let gauge_style = match playback.status {
        PlayerStatus::Error(_) => Style::default().fg(Color::Red),
        PlayerStatus::Playing => Style::default().fg(Color::Magenta),
        _ => Style::default().fg(Color::DarkGray),
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .gauge_style(gauge_style)
        .ratio(playback.progress().clamp(0.0, 1.0))
        .label(time_text(playback));
    frame.render_widget(gauge, chunks[2]);

    // Main list
    {
        // Only build ListItems for the visible window around the selection.
        let total = display.len();
        let list_height = chunks[3].height.saturating_sub(2) as usize;
        let sel_pos = display.iter().position(|&i| i == app.selected).unwrap_or(0);
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = sel_pos.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let playing_id = playback.current.as_ref().map(|t| &t.id);
        let visible_items: Vec<ListItem> = display[start..end]
            .iter()
            .map(|&i| {
                let track = &app.tracks[i];
                let fav = if app.is_favorite(&track.id) { "♥ " } else { "  " };
                let mic = if track.is_karaoke_track { " [K]" } else { "" };
                let dur = track.duration_hint.as_deref().unwrap_or("");
                let line = format!("{fav}{}{mic}  {dur}", track.display());
                let item = ListItem::new(line);
                if playing_id == Some(&track.id) {
                    item.bold()
                } else {
                    item
                }
            })
            .collect();

        let title = format!(" tracks ({total}) ");
        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    // Overlay metadata popup (keeps list visible under it)
    if app.metadata_window {
        let list_area = chunks[3];
        let popup_area = centered_rect_sized(72, 13, list_area);
        frame.render_widget(Clear, popup_area);

        let meta = app
            .selected_track()
            .map(|t| metadata_text(t))
            .unwrap_or_else(|| "No track selected".to_string());
        let meta_paragraph = Paragraph::new(meta)
            .block(
                Block::default()
                    .padding(left_pad())
                    .borders(Borders::ALL)
                    .title(" metadata (i closes) "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(meta_paragraph, popup_area);
    }

    // Prompt or latest notice
    let notice_line = match app.prompt {
        Some(Prompt::NewPlaylist) => Line::from(format!(" New playlist name: {}_", app.name_input)),
        Some(Prompt::NewLibrary) => Line::from(format!(" New library name: {}_", app.name_input)),
        _ => match app.latest_notice() {
            Some(n) => {
                let text = match &n.description {
                    Some(d) => format!(" {}: {}", n.title, d),
                    None => format!(" {}", n.title),
                };
                let style = match n.level {
                    NoticeLevel::Info => Style::default(),
                    NoticeLevel::Warning => Style::default().fg(Color::Yellow),
                    NoticeLevel::Error => Style::default().fg(Color::Red),
                };
                Line::styled(text, style)
            }
            None => Line::from(""),
        },
    };
    frame.render_widget(Paragraph::new(notice_line), chunks[4]);

    let footer = Paragraph::new(controls_text(controls_settings.seek_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}

fn metadata_text(track: &Track) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    format!(
        "Title: {}\nArtist: {}\nAlbum: {}\nDuration: {}\nGenre: {}\nDifficulty: {}\nKaraoke: {}\nCompetition: {}\nCover: {}\nSource: {}",
        track.title,
        track.artist,
        track.album.as_deref().unwrap_or("-"),
        track.duration_hint.as_deref().unwrap_or("-"),
        track.genre.as_deref().unwrap_or("-"),
        track.difficulty.map(|d| d.label()).unwrap_or("-"),
        yes_no(track.is_karaoke_track),
        yes_no(track.is_competition_eligible),
        track.cover_image(),
        track.source_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_includes_seek_seconds_and_keys() {
        let text = controls_text(7);
        assert!(text.contains("[H/L] seek -/+7s"));
        assert!(text.contains("[K] karaoke"));
        assert!(text.starts_with("[j/k] up/down"));
    }

    #[test]
    fn volume_text_shows_mute() {
        let mut state = PlaybackState::new(0.5);
        assert_eq!(volume_text(&state), "VOL: 50%");
        state.muted = true;
        assert_eq!(volume_text(&state), "VOL: muted");
    }

    #[test]
    fn time_text_without_track_is_zero() {
        let state = PlaybackState::new(1.0);
        assert_eq!(time_text(&state), "0:00 / 0:00");
    }

    #[test]
    fn metadata_shows_competition_and_cover_fallback() {
        let mut track = Track {
            id: "7".into(),
            title: "Anthem".to_string(),
            artist: "Unknown Artist".to_string(),
            album: None,
            source_url: "/music/anthem.mp3".to_string(),
            duration_hint: None,
            is_karaoke_track: true,
            is_competition_eligible: true,
            cover_image_url: None,
            genre: None,
            difficulty: None,
        };
        let text = metadata_text(&track);
        assert!(text.contains("Competition: yes"));
        assert!(text.contains(&format!("Cover: {}", crate::catalog::DEFAULT_COVER_URL)));

        track.is_competition_eligible = false;
        track.cover_image_url = Some("https://img.example/anthem.png".to_string());
        let text = metadata_text(&track);
        assert!(text.contains("Competition: no"));
        assert!(text.contains("Cover: https://img.example/anthem.png"));
    }
}

use std::collections::HashSet;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::*,
};
use tracing::{info, warn};

use crate::analyzer::{self, Player};
use crate::input::Source;
use crate::report;
use crate::roster::{self, PlayerId};
use crate::split::{self, GoldSplit};

const INDIGO: Color = Color::Rgb(0x75, 0x71, 0xF9);
const FUCHSIA: Color = Color::Rgb(0xF7, 0x80, 0xE2);
const RED: Color = Color::Rgb(0xD2, 0x0A, 0x2E);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Screen {
    #[default]
    Welcome,
    Selection,
    Results,
    StartOver,
}

impl Screen {
    fn title(self) -> &'static str {
        match self {
            Screen::Welcome => "Loot Split Calculator",
            Screen::Selection => "Player Selection",
            Screen::Results => "Results",
            Screen::StartOver => "Start Over",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Screen::Welcome => " start (enter) | scroll (j/k) | quit (q) ",
            Screen::Selection => " remove (space) | move (j/k) | split (enter) | quit (q) ",
            Screen::Results => " continue (enter) | quit (q) ",
            Screen::StartOver => " yes (y) | no, exit (n) ",
        }
    }
}

#[derive(Debug)]
pub struct App {
    running: bool,
    screen: Screen,
    source: Source,
    analyzer: String,
    players: Vec<Player>,
    removed: HashSet<PlayerId>,
    cursor: usize,
    split: Option<GoldSplit>,
    error: Option<String>,
    offset: usize,
    preview_lines: usize,
}

impl App {
    pub fn new(source: Source, analyzer: String) -> Self {
        Self {
            running: false,
            screen: Screen::default(),
            source,
            analyzer,
            players: Vec::new(),
            removed: HashSet::new(),
            cursor: 0,
            split: None,
            error: None,
            offset: 0,
            preview_lines: 0,
        }
    }

    /// Runs the interface until the user quits and returns the text report of
    /// the last completed split, if any.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<Option<String>> {
        self.running = true;
        while self.running {
            terminal.draw(|f| {
                self.render(f);
            })?;
            self.handle_crossterm_event();
        }
        Ok(self.split.as_ref().map(report::plain))
    }

    fn load_players(&mut self) {
        match analyzer::parse(&self.analyzer) {
            Ok((party, players)) => {
                info!(loot_type = %party.loot_type, "analyzer loaded");
                self.players = players;
                self.removed.clear();
                self.cursor = 0;
                self.error = None;
                self.screen = Screen::Selection;
            }
            Err(err) => {
                warn!(%err, "analyzer rejected");
                self.error = Some(err.to_string());
            }
        }
    }

    fn compute_split(&mut self) {
        let remaining = roster::without_ids(&self.players, &self.removed);
        match split::calculate(&remaining) {
            Ok(split) => {
                self.split = Some(split);
                self.error = None;
                self.screen = Screen::Results;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn start_over(&mut self) {
        if self.source.can_reload() {
            match self.source.read() {
                Ok(text) => self.analyzer = text,
                Err(err) => {
                    self.error = Some(format!("failed to reload analyzer: {err}"));
                    return;
                }
            }
        }
        self.offset = 0;
        self.load_players();
        if self.screen != Screen::Selection {
            self.screen = Screen::Welcome;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = self.get_layout_chunks(frame.area());
        self.render_title(frame, chunks[0]);
        match self.screen {
            Screen::Welcome => self.render_welcome(frame, chunks[1]),
            Screen::Selection => self.render_selection(frame, chunks[1]),
            Screen::Results => self.render_results(frame, chunks[1]),
            Screen::StartOver => self.render_start_over(frame, chunks[1]),
        }
        self.render_footer(frame, chunks[2]);
    }

    fn get_layout_chunks(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(area)
            .to_vec()
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(INDIGO))
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(format!("LOOTSPLIT - {}", self.screen.title()))
            .style(Style::default().fg(INDIGO).add_modifier(Modifier::BOLD));
        frame.render_widget(title, area);
    }

    fn render_welcome(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2).max(1) as usize;
        let lines: Vec<Line> = self
            .analyzer
            .lines()
            .flat_map(|line| textwrap::wrap(line, width))
            .map(|part| Line::from(part.into_owned()))
            .collect();
        self.preview_lines = lines.len();
        let p = Paragraph::new(Text::from(lines))
            .block(self.block().title(" Analyzer "))
            .scroll((self.offset as u16, 0));
        frame.render_widget(p, area);
    }

    fn render_selection(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .players
            .iter()
            .map(|player| {
                let (marker, style) = if self.removed.contains(&player.id) {
                    ("✗ ", Style::default().fg(RED))
                } else {
                    ("• ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(player.display_name(), style),
                ]))
            })
            .collect();
        let mut state = ListState::default();
        state.select(Some(self.cursor));
        let list = List::new(items)
            .block(self.block().title(" Remove players from loot split? "))
            .highlight_style(Style::default().fg(FUCHSIA).add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let Some(split) = &self.split else {
            return;
        };
        let kw = |s: String| Span::styled(s, Style::default().fg(INDIGO));
        let dkw = |s: &'static str| Span::styled(s, Style::default().fg(FUCHSIA));

        let mut lines: Vec<Line> = split
            .direct_transfers
            .iter()
            .map(|t| {
                Line::from(vec![
                    kw(t.from.clone()),
                    dkw(" to pay "),
                    kw(t.to.clone()),
                    kw(format!(" {} gp", t.amount)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            dkw("total profit: "),
            kw(format!("{} gp", split.total_balance)),
        ]));
        lines.push(Line::from(vec![
            dkw("total for each player: "),
            kw(format!("{} gp", split.equal_share)),
        ]));
        if split.remainder != 0 {
            lines.push(Line::from(vec![
                dkw("undistributed remainder: "),
                kw(format!("{} gp", split.remainder)),
            ]));
        }
        let p = Paragraph::new(Text::from(lines))
            .block(self.block().title(" Loot split results "))
            .wrap(Wrap { trim: false });
        frame.render_widget(p, area);
    }

    fn render_start_over(&self, frame: &mut Frame, area: Rect) {
        let p = Paragraph::new("Do you want to calculate another loot split?")
            .alignment(Alignment::Center)
            .block(self.block().title(" Start over? "));
        frame.render_widget(p, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = match &self.error {
            Some(err) => Paragraph::new(format!(" {err} ")).style(Style::default().fg(RED)),
            None => Paragraph::new(self.screen.hint()).style(Style::default()),
        };
        frame.render_widget(footer.alignment(Alignment::Left), area);
    }

    fn handle_crossterm_event(&mut self) {
        let Ok(Event::Key(key_event)) = event::read() else {
            return;
        };
        if key_event.kind != KeyEventKind::Press {
            return;
        }
        match (self.screen, key_event.code) {
            (_, KeyCode::Char('q') | KeyCode::Esc) => self.running = false,
            (Screen::Welcome, KeyCode::Enter) => self.load_players(),
            (Screen::Welcome, KeyCode::Char('j') | KeyCode::Down) => self.scroll_down(),
            (Screen::Welcome, KeyCode::Char('k') | KeyCode::Up) => self.scroll_up(),
            (Screen::Selection, KeyCode::Char('j') | KeyCode::Down) => self.select_next(),
            (Screen::Selection, KeyCode::Char('k') | KeyCode::Up) => self.select_prev(),
            (Screen::Selection, KeyCode::Char(' ')) => self.toggle_removed(),
            (Screen::Selection, KeyCode::Enter) => self.compute_split(),
            (Screen::Results, KeyCode::Enter) => self.screen = Screen::StartOver,
            (Screen::StartOver, KeyCode::Char('y')) => self.start_over(),
            (Screen::StartOver, KeyCode::Char('n')) => self.running = false,
            _ => {}
        }
    }

    fn scroll_down(&mut self) {
        if self.offset + 1 < self.preview_lines {
            self.offset += 1;
        }
    }

    fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.cursor + 1 < self.players.len() {
            self.cursor += 1;
        }
    }

    fn select_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn toggle_removed(&mut self) {
        let Some(player) = self.players.get(self.cursor) else {
            return;
        };
        if !self.removed.remove(&player.id) {
            self.removed.insert(player.id);
        }
        self.error = None;
    }
}

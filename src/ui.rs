use crate::list::{visible_recipients, Screen, SortField, ViewState};
use crate::notice;
use crate::recipient::{Recipient, Region, REGISTRATION_NUMBER_LEN};
use crate::store::RecipientStore;
use crate::validation::{ValidationDialog, VerificationStatus};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;

const PAGE_JUMP: usize = 20;

/// Below this height the header shrinks to a single banner line and the notice only shows
/// under the picker cards or in the `i` overlay.
const FULL_LAYOUT_MIN_HEIGHT: u16 = 40;

/// Below this width the status bar drops the row counter.
const ROW_COUNTER_MIN_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    /// Keystrokes go to the search box
    Search,
}

pub struct App {
    pub store: RecipientStore,
    pub view: ViewState,
    pub dialog: ValidationDialog,
    pub table_state: TableState,
    pub picker_index: usize,
    pub input_mode: InputMode,
    /// Notice + footer overlay, toggled with `i`
    pub show_notice: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: RecipientStore) -> Self {
        Self {
            store,
            view: ViewState::new(),
            dialog: ValidationDialog::new(),
            table_state: TableState::default(),
            picker_index: 0,
            input_mode: InputMode::Browse,
            show_notice: false,
            should_quit: false,
        }
    }

    pub fn visible(&self) -> Vec<&Recipient> {
        visible_recipients(self.store.all(), &self.view)
    }

    pub fn selected_recipient(&self) -> Option<&Recipient> {
        let visible = self.visible();
        self.table_state.selected().and_then(|i| visible.get(i).copied())
    }

    /// Move the cursor back to the first row after the visible set changed.
    fn reset_selection(&mut self) {
        if self.visible().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub fn enter_region(&mut self, region: Region) {
        self.view.select_region(region);
        self.input_mode = InputMode::Browse;
        self.reset_selection();
    }

    pub fn back_to_picker(&mut self) {
        self.view.back_to_picker();
        self.input_mode = InputMode::Browse;
        self.table_state.select(None);
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.view.toggle_sort(field);
        self.reset_selection();
    }

    pub fn open_validation(&mut self) {
        let visible = visible_recipients(self.store.all(), &self.view);
        if let Some(recipient) = self.table_state.selected().and_then(|i| visible.get(i)) {
            self.dialog.open(recipient);
        }
    }

    pub fn picker_next(&mut self) {
        self.picker_index = (self.picker_index + 1) % Region::ALL.len();
    }

    pub fn picker_previous(&mut self) {
        self.picker_index = (self.picker_index + Region::ALL.len() - 1) % Region::ALL.len();
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => (i + PAGE_JUMP).min(len - 1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        if self.visible().is_empty() {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(PAGE_JUMP));
        self.table_state.select(Some(i));
    }

    pub fn first(&mut self) {
        if !self.visible().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.dialog.is_open() {
            self.handle_dialog_key(key);
            return;
        }

        if self.show_notice {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('i') => self.show_notice = false,
                _ => {}
            }
            return;
        }

        match self.view.screen() {
            Screen::RegionPicker => self.handle_picker_key(key),
            Screen::Table(_) => match self.input_mode {
                InputMode::Search => self.handle_search_key(key),
                InputMode::Browse => self.handle_table_key(key),
            },
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dialog.close(),
            KeyCode::Enter => {
                self.dialog.submit();
            }
            KeyCode::Backspace => self.dialog.backspace(),
            KeyCode::Char(c) => self.dialog.push_char(c),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('i') => self.show_notice = true,
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') | KeyCode::Tab => {
                self.picker_next()
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') | KeyCode::BackTab => {
                self.picker_previous()
            }
            KeyCode::Enter => self.enter_region(Region::ALL[self.picker_index]),
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                self.picker_index = index;
                self.enter_region(Region::ALL[index]);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Browse,
            KeyCode::Backspace => {
                self.view.pop_search_char();
                self.reset_selection();
            }
            KeyCode::Char(c) => {
                self.view.push_search_char(c);
                self.reset_selection();
            }
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.back_to_picker(),
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('i') => self.show_notice = true,
            KeyCode::Char('x') => {
                self.view.clear_search();
                self.reset_selection();
            }
            KeyCode::Char('n') => self.toggle_sort(SortField::FullName),
            KeyCode::Char('r') => self.toggle_sort(SortField::Region),
            KeyCode::Enter | KeyCode::Char('v') => self.open_validation(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            _ => {}
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish_event_loop(res)
}

/// Surface a failed event loop once the terminal is restored.
fn finish_event_loop(res: io::Result<()>) -> Result<()> {
    res.context("terminal event loop failed")
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
            if app.should_quit {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let compact = size.height < FULL_LAYOUT_MIN_HEIGHT;
    let (header_height, notice_height, status_height) = if compact { (3, 0, 1) } else { (6, 12, 3) };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Header banner
            Constraint::Min(0),                // Picker or table
            Constraint::Length(notice_height), // Important notice + footer
            Constraint::Length(status_height), // Status bar
        ])
        .split(size);

    if compact {
        render_compact_header(f, chunks[0]);
    } else {
        render_header(f, chunks[0]);
    }

    match app.view.screen() {
        Screen::RegionPicker if compact => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(PICKER_HEIGHT), Constraint::Min(0)])
                .split(chunks[1]);
            render_region_picker(f, parts[0], app);
            render_notice(f, parts[1], true);
        }
        Screen::RegionPicker => render_region_picker(f, chunks[1], app),
        Screen::Table(region) => render_table_view(f, chunks[1], app, region),
    }

    if !compact {
        render_notice(f, chunks[2], false);
    }
    render_status_bar(f, chunks[3], app, !compact);

    if app.show_notice {
        let area = centered_dialog_area(size, 84, 20);
        f.render_widget(Clear, area);
        render_notice(f, area, false);
    }

    if app.dialog.is_open() {
        let area = f.size();
        render_validation_dialog(f, area, &app.dialog);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header_text = vec![
        Line::from(Span::styled(
            notice::MOVEMENT.to_uppercase(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            notice::ORGANIZATION,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(notice::SUBTITLE)),
        Line::from(vec![
            Span::styled(" ! ", Style::default().fg(Color::White).bg(Color::Red)),
            Span::raw(" "),
            Span::styled(notice::UNOFFICIAL_BANNER, Style::default().fg(Color::LightRed)),
        ]),
    ];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

/// One-line header for short terminals; the unofficial banner always stays visible.
fn render_compact_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ! ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::raw(" "),
        Span::styled(notice::UNOFFICIAL_BANNER, Style::default().fg(Color::LightRed)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" PPTD - Kawal Data BLT Kesra Desa Komis "),
    );

    f.render_widget(header, area);
}

/// Border + intro line + cards
const PICKER_HEIGHT: u16 = 8;

fn render_region_picker(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Pilih Wilayah Dusun ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let intro = Paragraph::new(Line::from(Span::styled(
        "Silakan pilih dusun untuk melihat daftar penerima bantuan.",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(intro, rows[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);

    for (i, (region, count)) in app.store.region_counts().into_iter().enumerate() {
        let selected = i == app.picker_index;
        let border = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let content = vec![
            Line::from(Span::styled(
                region.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} penerima", count),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                "Lihat Daftar Penerima →",
                Style::default().fg(if selected { Color::Yellow } else { Color::DarkGray }),
            )),
        ];

        let card = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", i + 1)),
        );
        f.render_widget(card, cards[i]);
    }
}

fn render_table_view(f: &mut Frame, area: Rect, app: &mut App, region: Region) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Toolbar
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Table footer
        ])
        .split(area);

    let visible = visible_recipients(app.store.all(), &app.view);
    let total = visible.len();

    // Toolbar: title + search box
    let toolbar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            region.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Total {} Penerima Terdaftar", total),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(title, toolbar[0]);

    let searching = app.input_mode == InputMode::Search;
    let search_line = if app.view.search_term().is_empty() && !searching {
        Line::from(Span::styled(
            "Cari nama penerima...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = vec![Span::raw(app.view.search_term().to_string())];
        if searching {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };
    let search_box = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if searching { Color::Yellow } else { Color::White }))
            .title(" Cari (/) "),
    );
    f.render_widget(search_box, toolbar[1]);

    let table_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Daftar Penerima ");

    if visible.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Data tidak ditemukan",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Coba kata kunci pencarian lain.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(table_block);
        f.render_widget(placeholder, rows[1]);
    } else {
        let sort = app.view.sort();
        let arrow_for = |field: SortField| match sort {
            Some(spec) if spec.field == field => format!(" {}", spec.direction.arrow()),
            _ => String::new(),
        };

        let header_cells = [
            "No".to_string(),
            format!("Nama Penerima{}", arrow_for(SortField::FullName)),
            "Nomor KK (Disamarkan)".to_string(),
            format!("Alamat{}", arrow_for(SortField::Region)),
            "Aksi".to_string(),
        ]
        .into_iter()
        .map(|h| {
            Cell::from(h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

        let header = Row::new(header_cells)
            .style(Style::default().bg(Color::DarkGray))
            .height(1);

        let table_rows = visible.iter().enumerate().map(|(index, recipient)| {
            let cells = vec![
                Cell::from(format!("{}", index + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(recipient.full_name.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(recipient.masked_registration_number()),
                Cell::from(recipient.region.as_str()).style(Style::default().fg(Color::Blue)),
                Cell::from("[Validasi]").style(Style::default().fg(Color::Green)),
            ];

            Row::new(cells).height(1)
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(4),
                Constraint::Min(16),
                Constraint::Length(21),
                Constraint::Length(14),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(table_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

        f.render_stateful_widget(table, rows[1], &mut app.table_state);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(format!(" Menampilkan {} data", total), Style::default().fg(Color::DarkGray)),
        Span::raw("  |  "),
        Span::styled(notice::PRIVACY_NOTE, Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(footer, rows[2]);
}

/// Compact mode drops the intro and leads with the items and disclaimer, so the lines that
/// matter most survive a short panel.
fn render_notice(f: &mut Frame, area: Rect, compact: bool) {
    let muted = Style::default().fg(Color::DarkGray);
    let footer = [
        Line::from(Span::styled(
            notice::ORGANIZATION,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(notice::FOOTER_ABOUT, muted)),
    ];

    let mut content = Vec::new();
    if !compact {
        content.push(Line::from(Span::raw(notice::NOTICE_INTRO)));
    }
    for (heading, body) in notice::NOTICE_ITEMS {
        content.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::raw(body),
        ]));
    }
    if !compact {
        content.push(Line::from(""));
        content.extend(footer.iter().cloned());
    }
    content.push(Line::from(Span::styled(notice::FOOTER_DISCLAIMER, muted)));
    content.push(Line::from(Span::styled(notice::current_copyright_line(), muted)));
    if compact {
        content.extend(footer);
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(" {} ", notice::NOTICE_TITLE)),
        );

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, bordered: bool) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let status_spans = if app.dialog.is_open() {
        vec![
            Span::raw(" "),
            key("0-9"),
            Span::raw(" Input | "),
            key("Enter"),
            Span::raw(" Cek | "),
            key("Esc"),
            Span::raw(" Tutup"),
        ]
    } else {
        match app.view.screen() {
            Screen::RegionPicker => vec![
                Span::raw(" "),
                key("←/→"),
                Span::raw(" Pilih | "),
                key("1-4"),
                Span::raw(" Langsung | "),
                key("Enter"),
                Span::raw(" Buka | "),
                key("i"),
                Span::raw(" Info | "),
                Span::styled("q", Style::default().fg(Color::Red)),
                Span::raw(" Keluar"),
            ],
            Screen::Table(_) => {
                let mut spans = Vec::new();
                if area.width >= ROW_COUNTER_MIN_WIDTH {
                    let selected = app.table_state.selected().map(|i| i + 1).unwrap_or(0);
                    spans.push(Span::styled(
                        format!(" Baris: {}/{} ", selected, app.visible().len()),
                        Style::default().fg(Color::Cyan),
                    ));
                    spans.push(Span::raw("|"));
                }
                spans.extend([
                    Span::raw(" "),
                    key("/"),
                    Span::raw(" Cari | "),
                    key("n"),
                    Span::raw(" Nama | "),
                    key("r"),
                    Span::raw(" Dusun | "),
                    key("Enter"),
                    Span::raw(" Validasi | "),
                    key("i"),
                    Span::raw(" Info | "),
                    key("Esc"),
                    Span::raw(" Kembali | "),
                    Span::styled("q", Style::default().fg(Color::Red)),
                    Span::raw(" Keluar"),
                ]);
                spans
            }
        }
    };

    let mut status_bar = Paragraph::new(Line::from(status_spans));
    if bordered {
        status_bar = status_bar.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );
    }

    f.render_widget(status_bar, area);
}

/// Centered rect clamped to `area`. Caller renders `Clear` first.
fn centered_dialog_area(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(max_height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_validation_dialog(f: &mut Frame, area: Rect, dialog: &ValidationDialog) {
    let Some(target) = dialog.target() else {
        return;
    };

    let dialog_area = centered_dialog_area(area, 60, 17);
    f.render_widget(Clear, dialog_area);

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let input_span = if dialog.input().is_empty() {
        Span::styled("3527xxxxxxxxxxxx", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            dialog.input().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let result_line = match dialog.status() {
        VerificationStatus::Idle => Line::from(""),
        status @ VerificationStatus::Match => Line::from(Span::styled(
            format!("✔ {}", status.message().unwrap_or_default()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        status @ VerificationStatus::Mismatch => Line::from(Span::styled(
            format!("✘ {}", status.message().unwrap_or_default()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    };

    let button_style = if dialog.can_submit() {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("  Nama Penerima", label)),
        Line::from(Span::styled(
            format!("  {}", target.full_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", target.region.as_str()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled("  Masukkan Nomor KK Lengkap", label)),
        Line::from(vec![Span::raw("  "), input_span]),
        Line::from(Span::styled(
            format!("  {}/{} digit", dialog.input().len(), REGISTRATION_NUMBER_LEN),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        result_line,
        Line::from(""),
        Line::from(Span::styled(" Cek Validasi ", button_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter cek  |  Esc tutup",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Validasi Data Penerima "),
    );

    f.render_widget(paragraph, dialog_area);
}

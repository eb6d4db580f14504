use crate::counter::{CounterState, CounterTone};
use crate::ui::app::Control;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ATHERTON_VIOLET, BEAVER_BLUE, BUTTON_DISABLED, GLOBAL_BORDER, LIMESTONE_GRAY, MINUS_FOCUS,
    PLUS_FOCUS, PRIMARY_TEXT,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 7;

/// Counter card: the value, the range and the two buttons.
pub struct CounterView<'a> {
    state: &'a CounterState,
    focus: Control,
}

impl<'a> CounterView<'a> {
    pub fn new(state: &'a CounterState, focus: Control) -> Self {
        Self { state, focus }
    }

    fn enabled(&self, control: Control) -> bool {
        match control {
            Control::Decrement => self.state.can_decrement(),
            Control::Increment => self.state.can_increment(),
        }
    }

    fn button(&self, control: Control) -> Span<'static> {
        let text = format!("[ {} ]", control.label());
        let style = if !self.enabled(control) {
            Style::default()
                .fg(BUTTON_DISABLED)
                .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        } else if control == self.focus {
            let bg = match control {
                Control::Decrement => MINUS_FOCUS,
                Control::Increment => PLUS_FOCUS,
            };
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PRIMARY_TEXT)
        };
        Span::styled(text, style)
    }
}

fn value_style(tone: CounterTone) -> Style {
    let color = match tone {
        CounterTone::Normal => PRIMARY_TEXT,
        CounterTone::Milestone => ATHERTON_VIOLET,
        CounterTone::Jackpot => BEAVER_BLUE,
        CounterTone::Limit => LIMESTONE_GRAY,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

impl Widget for CounterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect_by_size(area, CARD_WIDTH, CARD_HEIGHT);
        let border = if self.state.is_at_boundary() {
            LIMESTONE_GRAY
        } else {
            GLOBAL_BORDER
        };
        let dim = Style::default().fg(LIMESTONE_GRAY).add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.state.value().to_string(),
                value_style(self.state.tone()),
            )),
            Line::from(Span::styled(
                format!("{} … {}", self.state.min(), self.state.max()),
                dim,
            )),
            Line::from(""),
            Line::from(vec![
                self.button(Control::Decrement),
                Span::raw("   "),
                self.button(Control::Increment),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(card, buf);
    }
}

use crate::ui::app::App;
use crate::ui::confetti::{ConfettiOverlay, ConfettiState};
use crate::ui::counter_view::CounterView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(), header);
    frame.render_widget(Clear, body);
    frame.render_widget(CounterView::new(app.counter(), app.focus()), body);
    frame.render_widget(Footer::widget(footer), footer);

    if let ConfettiState::Popping { effect, frame: tick } = app.confetti() {
        frame.render_widget(ConfettiOverlay::new(effect, *tick), body);
    }
}

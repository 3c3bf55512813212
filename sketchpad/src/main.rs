use std::time::Duration;

use clap::Parser;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::widget::{button, column, image as image_widget, row, text, Action, Column, Container};
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Task, Theme};
use log::{debug, info};

use scrawlcore::canvas::{map_to_surface, Point as PadPoint, Surface, SurfaceConfig, StrokeTracker};
use scrawlcore::protocol::{RecognizeRequest, RecognizeResponse};
use scrawlcore::results::{format_score, ResultPanel};
use scrawlcore::telemetry::RequestStats;
use scrawlcore::{RecognizeError, RecognizeResult};

/// Rendered size of the drawing pad; matches the surface's logical
/// resolution so input maps one to one by default.
const PAD_POINTS: f32 = 240.0;
const PREVIEW_POINTS: f32 = 112.0;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Parser)]
#[command(author, version, about = "Freehand digit pad with remote recognition")]
struct Args {
    /// Base URL of the recognition service
    #[arg(long, default_value = "http://localhost:8080")]
    endpoint: String,
}

fn main() -> iced::Result {
    env_logger::init();
    let args = Args::parse();
    let endpoint = args.endpoint;

    iced::application(move || App::boot(endpoint.clone()), App::update, App::view)
        .title(application_title)
        .theme(application_theme)
        .window_size((760.0, 480.0))
        .run()
}

fn application_title(_: &App) -> String {
    "Scrawl Sketchpad".into()
}

fn application_theme(_: &App) -> Theme {
    Theme::Dark
}

struct App {
    endpoint: String,
    tracker: StrokeTracker,
    surface: Surface,
    panel: ResultPanel,
    stats: RequestStats,
}

/// Pointer transitions published by the drawing pad widget.
#[derive(Debug, Clone)]
enum PadEvent {
    Pressed(PadPoint),
    Moved(PadPoint),
    Released,
    Left,
}

#[derive(Debug, Clone)]
enum Message {
    Pad(PadEvent),
    Recognize,
    Recognized(RecognizeResult<RecognizeResponse>),
    Clear,
}

impl App {
    fn boot(endpoint: String) -> (Self, Task<Message>) {
        (
            App {
                endpoint,
                tracker: StrokeTracker::new(),
                surface: Surface::new(SurfaceConfig::default()),
                panel: ResultPanel::new(),
                stats: RequestStats::new(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Pad(PadEvent::Pressed(point)) => {
                state.tracker.press(point);
                Task::none()
            }
            Message::Pad(PadEvent::Moved(point)) => {
                if let Some(segment) = state.tracker.motion(point) {
                    state.surface.commit(segment);
                }
                Task::none()
            }
            Message::Pad(PadEvent::Released) | Message::Pad(PadEvent::Left) => {
                state.tracker.finish();
                Task::none()
            }
            Message::Clear => {
                state.tracker.finish();
                state.surface.clear();
                state.panel.reset();
                Task::none()
            }
            Message::Recognize => {
                if state.panel.busy {
                    return Task::none();
                }
                let payload = match state.surface.to_png_data_uri() {
                    Ok(payload) => payload,
                    Err(err) => {
                        state.panel.finish(Err(err));
                        return Task::none();
                    }
                };
                debug!(
                    "submitting snapshot of {} committed segments",
                    state.surface.segments().len()
                );
                state.panel.begin_request();
                Task::perform(
                    recognize(state.endpoint.clone(), payload),
                    Message::Recognized,
                )
            }
            Message::Recognized(outcome) => {
                match &outcome {
                    Ok(response) => {
                        state.stats.record_completed();
                        info!("service predicted {:?}", response.prediction);
                    }
                    Err(err) => {
                        state.stats.record_failed(err);
                        info!("recognition failed: {err}");
                    }
                }
                let (completed, failed) = state.stats.snapshot();
                debug!(
                    "requests completed {completed}, failed {failed}, last failure {:?}",
                    state.stats.last_failure()
                );
                state.panel.finish(outcome);
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let pad = Canvas::new(DigitPad {
            surface: &state.surface,
        })
        .width(Length::Fixed(PAD_POINTS))
        .height(Length::Fixed(PAD_POINTS));

        let recognize_button = if state.panel.busy {
            button("Recognizing...").padding(10)
        } else {
            button("Recognize").on_press(Message::Recognize).padding(10)
        };

        let input_column = column![
            text("Input").size(26),
            pad,
            text("Draw a single digit (0-9) with the mouse.").size(12),
            row![
                button("Clear").on_press(Message::Clear).padding(10),
                recognize_button,
            ]
            .spacing(10),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(300.0));

        let preview: Element<'_, Message> = if let Some(bytes) = &state.panel.preview_png {
            image_widget(image_widget::Handle::from_bytes(bytes.clone()))
                .width(Length::Fixed(PREVIEW_POINTS))
                .height(Length::Fixed(PREVIEW_POINTS))
                .into()
        } else {
            text("No preview available").size(12).into()
        };

        let score_list = if state.panel.scores.is_empty() {
            Column::new().push(text("No scores yet").size(12))
        } else {
            state
                .panel
                .scores
                .iter()
                .fold(Column::new().spacing(4), |col, score| {
                    col.push(text(format_score(score)).size(14))
                })
        };

        let output_column = column![
            text("Formalized").size(26),
            text("Normalized input").size(16),
            preview,
            row![
                text("Prediction").size(16),
                text(&state.panel.prediction).size(22),
            ]
            .spacing(10),
            row![
                text("Confidence").size(16),
                text(&state.panel.confidence).size(22),
            ]
            .spacing(10),
            text("Top scores").size(16),
            Container::new(score_list).padding(6),
            text(&state.panel.status).size(14),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![input_column, output_column].spacing(20).padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

async fn recognize(endpoint: String, image_base64: String) -> RecognizeResult<RecognizeResponse> {
    let url = format!("{}/api/recognize", endpoint.trim_end_matches('/'));
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| RecognizeError::Transport(err.to_string()))?;

    let response = client
        .post(url)
        .json(&RecognizeRequest { image_base64 })
        .send()
        .await
        .map_err(|err| RecognizeError::Transport(err.to_string()))?;

    if !response.status().is_success() {
        return Err(RecognizeError::Service(response.status().as_u16()));
    }

    response
        .json::<RecognizeResponse>()
        .await
        .map_err(|err| RecognizeError::Transport(err.to_string()))
}

struct DigitPad<'a> {
    surface: &'a Surface,
}

impl DigitPad<'_> {
    fn map(&self, position: iced::Point, bounds: Rectangle) -> PadPoint {
        map_to_surface(
            PadPoint::new(position.x, position.y),
            bounds.width,
            bounds.height,
            self.surface.size(),
        )
    }
}

/// Whether the pointer was last seen over the pad; lets a move outside the
/// bounds surface as a single leave transition.
#[derive(Debug, Clone, Copy, Default)]
struct PadWidgetState {
    hovered: bool,
}

impl canvas::Program<Message> for DigitPad<'_> {
    type State = PadWidgetState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(
                    Action::publish(Message::Pad(PadEvent::Pressed(self.map(position, bounds))))
                        .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(position) = cursor.position_in(bounds) {
                    state.hovered = true;
                    Some(Action::publish(Message::Pad(PadEvent::Moved(
                        self.map(position, bounds),
                    ))))
                } else if state.hovered {
                    state.hovered = false;
                    Some(Action::publish(Message::Pad(PadEvent::Left)))
                } else {
                    None
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Action::publish(Message::Pad(PadEvent::Released)))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.hovered {
                    state.hovered = false;
                    Some(Action::publish(Message::Pad(PadEvent::Left)))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), Color::BLACK);

        let scale = bounds.width / self.surface.size() as f32;
        let ink = Stroke {
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
                .with_width(self.surface.stroke_width() * scale)
                .with_color(Color::WHITE)
        };

        for segment in self.surface.segments() {
            let path = Path::line(
                iced::Point::new(segment.from.x * scale, segment.from.y * scale),
                iced::Point::new(segment.to.x * scale, segment.to.y * scale),
            );
            frame.stroke(&path, ink);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

use serde_json::to_string_pretty;
use shared::presentation::{Presentation, ProbabilityBar, Summary};
use shared::{DetectionResult, FileKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<DetectionResult>,
    pub file_name: String,
    pub file_type: FileKind,
    pub loading: bool,
    pub error: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let presentation =
        Presentation::build(props.result.as_ref(), props.loading, props.error.as_deref());

    match presentation {
        Presentation::Loading => html! {
            <div class="results-container loading-result">
                <i class="fa-solid fa-spinner fa-spin"></i>
                <p>{"Analyzing file..."}</p>
            </div>
        },
        Presentation::Failed(message) => html! {
            <div class="error-message">
                <h3><i class="fa-solid fa-circle-exclamation"></i>{" Error"}</h3>
                <p>{ message }</p>
            </div>
        },
        Presentation::Empty => html! {},
        Presentation::Summary(summary) => {
            render_summary(&summary, &props.file_name, props.file_type, props.result.as_ref())
        }
    }
}

fn render_summary(
    summary: &Summary,
    file_name: &str,
    file_type: FileKind,
    result: Option<&DetectionResult>,
) -> Html {
    let tone = summary.tone();

    html! {
        <div class={classes!("results-container", if summary.is_ai { "ai-detected" } else { "not-ai" })}>
            <div class="result-header">
                <h2><i class="fa-solid fa-chart-simple"></i>{" Analysis Result"}</h2>
            </div>
            <dl class="result-facts">
                <dt>{"File"}</dt>
                <dd>{ file_name }</dd>
                <dt>{"Type"}</dt>
                <dd class="capitalize">{ file_type.to_string() }</dd>
                <dt>{"Result"}</dt>
                <dd>
                    <span class={classes!("verdict-badge", tone.css_class())}>
                        <span class="verdict-dot"></span>
                        { summary.badge() }
                    </span>
                </dd>
            </dl>
            <div class="detailed-results">
                <h3>{"Probabilities"}</h3>
                <div class="result-bars">
                    { for summary.bars.iter().map(render_bar) }
                </div>
            </div>
            { render_raw_response(result) }
        </div>
    }
}

fn render_bar(bar: &ProbabilityBar) -> Html {
    html! {
        <div class="result-item">
            <div class="result-label">{ bar.caption() }</div>
            <div class="result-bar-container">
                <div
                    class={classes!("result-bar", bar.tone.css_class())}
                    style={bar.percentage.width_style()}
                ></div>
            </div>
            <div class="result-value">{ bar.percentage.to_string() }</div>
        </div>
    }
}

fn render_raw_response(result: Option<&DetectionResult>) -> Html {
    let raw = result.and_then(|result| {
        let encoded = match result {
            DetectionResult::Text(flat) | DetectionResult::Image(flat) => to_string_pretty(flat),
            DetectionResult::Video(video) => to_string_pretty(video),
        };
        encoded.ok()
    });

    match raw {
        Some(raw) => html! {
            <details class="raw-response">
                <summary>{"Raw response"}</summary>
                <pre>{ raw }</pre>
            </details>
        },
        None => html! {},
    }
}

use crate::domain::question::Question;
use crate::domain::responses::{QUESTION_COUNT, ResponseSet};
use crate::domain::time_projection::TimeProjection;
use crate::services::estimation_report::EstimationReport;
use crate::services::workdays::CompletionDates;

pub fn format_estimation_report(report: &EstimationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Estimation Result".to_string());
    lines.push(format!("{}: {}", report.unit, report.estimate));
    lines.push(format!(
        "Total Score: {}/{} ({})",
        report.total_score, report.max_score, report.severity
    ));
    lines.push(String::new());
    lines.push("Question | Answer".to_string());
    lines.push("---------|-------".to_string());
    for answer in &report.answers {
        lines.push(format!(
            "{} | {} ({})",
            answer.question, answer.label, answer.value
        ));
    }

    if let Some(projection) = &report.time_projection {
        lines.push(String::new());
        lines.push(format_time_projection(projection));
    }
    if let Some(dates) = &report.completion_dates {
        lines.push(String::new());
        lines.push(format_completion_dates(dates));
    }
    if !report.methods.is_empty() {
        lines.push(String::new());
        lines.push("Estimation Methods Used:".to_string());
        lines.extend(report.methods.iter().map(|method| format!("- {method}")));
    }

    lines.join("\n")
}

pub fn format_time_projection(projection: &TimeProjection) -> String {
    let lines = [
        "Time Estimation Results".to_string(),
        format!("Base Days: {}", projection.base_days),
        format!("With Buffer: {}", projection.buffered_days),
        format!("Total Hours: {}", projection.total_hours),
        "Three-Point Estimation:".to_string(),
        format!("Optimistic (Best Case): {}", projection.optimistic_days),
        format!("Expected (Most Likely): {}", projection.expected_days),
        format!("Pessimistic (Worst Case): {}", projection.pessimistic_days),
    ];
    lines.join("\n")
}

fn format_completion_dates(dates: &CompletionDates) -> String {
    let lines = [
        format!("Completion Dates (from {}):", dates.start_date),
        format!("Optimistic: {}", dates.optimistic),
        format!("Expected: {}", dates.expected),
        format!("Pessimistic: {}", dates.pessimistic),
        format!("With Buffer: {}", dates.buffered),
    ];
    lines.join("\n")
}

pub fn format_questions(questions: &[Question]) -> String {
    let mut lines = Vec::new();
    for (index, question) in questions.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{}. {} [{}]", index + 1, question.title, question.id));
        lines.push(format!("   {}", question.description));
        let options: Vec<String> = question
            .options
            .iter()
            .map(|option| format!("{} ({})", option.label, option.value))
            .collect();
        lines.push(format!("   Options: {}", options.join(", ")));
    }
    lines.join("\n")
}

pub fn format_progress(responses: &ResponseSet) -> String {
    format!(
        "{} of {} questions answered ({:.0}%)",
        responses.answered_count(),
        QUESTION_COUNT,
        responses.progress_fraction() * 100.0
    )
}

use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::services::metrics_service::MetricsService;
use crate::utils::time::today;
use rust_xlsxwriter::*;

pub struct ExportService;

impl ExportService {
    /// Generate a styled XLSX workbook from a (typically pre-filtered)
    /// candidate list.
    pub fn generate_candidates_xlsx(candidates: &[Candidate]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Candidates")?;
        let as_of = today();

        // ── Color palette ──
        let primary_color = Color::RGB(0x1E293B); // Slate 800
        let header_bg = Color::RGB(0x0F172A); // Slate 900
        let header_text = Color::White;
        let alt_row_1 = Color::RGB(0xF8FAFC); // Slate 50
        let alt_row_2 = Color::White;
        let border_color = Color::RGB(0xE2E8F0); // Slate 200

        // ── Column definitions ──
        let columns = [
            ("№", 8.0),
            ("Name", 30.0),
            ("Email", 30.0),
            ("Mobile", 18.0),
            ("City", 18.0),
            ("Status", 16.0),
            ("Posting", 24.0),
            ("Source", 16.0),
            ("Experience (yrs)", 16.0),
            ("Current Salary", 16.0),
            ("Expected Salary", 16.0),
            ("Top Dev", 10.0),
            ("Registered", 20.0),
        ];

        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }

        // ── Title row ──
        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(header_text)
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);

        worksheet.set_row_height(0, 40)?;
        worksheet.merge_range(0, 0, 0, (columns.len() - 1) as u16, "Candidate Report", &title_format)?;

        // ── Subtitle row ──
        let subtitle_format = Format::new()
            .set_font_size(10)
            .set_italic()
            .set_font_color(Color::RGB(0x94A3B8))
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);

        worksheet.set_row_height(1, 22)?;
        let exported = chrono::Utc::now().format("%d.%m.%Y %H:%M UTC").to_string();
        let subtitle_text = format!("Exported: {}  •  Candidates: {}", exported, candidates.len());
        worksheet.merge_range(1, 0, 1, (columns.len() - 1) as u16, &subtitle_text, &subtitle_format)?;

        // ── Header row ──
        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(header_text)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        let header_row = 2;
        worksheet.set_row_height(header_row, 30)?;
        for (i, (name, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(header_row, i as u16, *name, &header_format)?;
        }

        // ── Data rows ──
        let data_start_row = 3;
        for (idx, candidate) in candidates.iter().enumerate() {
            let row = data_start_row + idx as u32;
            let bg = if idx % 2 == 0 { alt_row_1 } else { alt_row_2 };

            let base_fmt = Format::new()
                .set_font_size(10)
                .set_background_color(bg)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);

            worksheet.set_row_height(row, 22)?;
            worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &center_fmt)?;

            let name_fmt = base_fmt.clone().set_bold();
            worksheet.write_string_with_format(row, 1, &candidate.name, &name_fmt)?;
            worksheet.write_string_with_format(row, 2, candidate.email.as_deref().unwrap_or("—"), &base_fmt)?;
            worksheet.write_string_with_format(row, 3, candidate.mobile_no.as_deref().unwrap_or("—"), &base_fmt)?;
            worksheet.write_string_with_format(row, 4, candidate.city.as_deref().unwrap_or("—"), &base_fmt)?;

            let status_fmt = Format::new()
                .set_font_size(10)
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Self::status_color(candidate.status))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            worksheet.write_string_with_format(row, 5, candidate.status.as_str(), &status_fmt)?;

            worksheet.write_string_with_format(row, 6, candidate.posting_title.as_deref().unwrap_or("—"), &base_fmt)?;
            worksheet.write_string_with_format(row, 7, candidate.source.as_deref().unwrap_or("—"), &base_fmt)?;

            match MetricsService::years_of_experience(candidate, as_of) {
                Some(years) => {
                    worksheet.write_number_with_format(row, 8, years, &center_fmt)?;
                }
                None => {
                    worksheet.write_string_with_format(row, 8, "—", &center_fmt)?;
                }
            }

            let salary = |v: Option<rust_decimal::Decimal>| {
                v.map(|d| d.to_string()).unwrap_or_else(|| "—".to_string())
            };
            worksheet.write_string_with_format(row, 9, &salary(candidate.current_salary), &center_fmt)?;
            worksheet.write_string_with_format(row, 10, &salary(candidate.expected_salary), &center_fmt)?;
            worksheet.write_string_with_format(row, 11, if candidate.is_top_developer { "★" } else { "" }, &center_fmt)?;

            let created_str = candidate.created_at.format("%d.%m.%Y %H:%M").to_string();
            worksheet.write_string_with_format(row, 12, &created_str, &center_fmt)?;
        }

        // ── Summary row ──
        let total_row = data_start_row + candidates.len() as u32 + 1;
        let summary_fmt = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(primary_color)
            .set_background_color(Color::RGB(0xE0E7FF)) // Indigo 100
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);

        worksheet.set_row_height(total_row, 26)?;
        worksheet.merge_range(
            total_row,
            0,
            total_row,
            1,
            &format!("Total: {} candidates", candidates.len()),
            &summary_fmt,
        )?;

        let count_of = |status: CandidateStatus| {
            candidates.iter().filter(|c| c.status == status).count()
        };
        let status_summary = format!(
            "Active: {} | Interviewed: {} | Shortlisted: {} | Hired: {} | Rejected: {}",
            count_of(CandidateStatus::Active),
            count_of(CandidateStatus::Interviewed),
            count_of(CandidateStatus::Shortlisted),
            count_of(CandidateStatus::Hired),
            count_of(CandidateStatus::Rejected),
        );
        worksheet.merge_range(total_row, 2, total_row, 7, &status_summary, &summary_fmt)?;

        let top_developers = candidates.iter().filter(|c| c.is_top_developer).count();
        let experienced = candidates
            .iter()
            .filter(|c| MetricsService::years_of_experience(c, as_of).unwrap_or(0.0) >= 5.0)
            .count();
        let stats_summary = format!(
            "Top developers: {} | 5+ yrs experience: {}",
            top_developers, experienced
        );
        worksheet.merge_range(total_row, 8, total_row, 12, &stats_summary, &summary_fmt)?;

        // Freeze panes (header stays visible while scrolling)
        worksheet.set_freeze_panes(3, 0)?;
        worksheet.autofilter(
            2,
            0,
            (data_start_row + candidates.len() as u32 - 1).max(2),
            (columns.len() - 1) as u16,
        )?;

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }

    fn status_color(status: CandidateStatus) -> Color {
        match status {
            CandidateStatus::Active => Color::RGB(0x3B82F6),      // Blue
            CandidateStatus::Pending => Color::RGB(0xF59E0B),     // Amber
            CandidateStatus::Interviewed => Color::RGB(0x8B5CF6), // Violet
            CandidateStatus::Shortlisted => Color::RGB(0x06B6D4), // Cyan
            CandidateStatus::Hired => Color::RGB(0x10B981),       // Emerald
            CandidateStatus::Rejected => Color::RGB(0xEF4444),    // Red
            CandidateStatus::Withdrawn => Color::RGB(0x64748B),   // Slate
        }
    }
}

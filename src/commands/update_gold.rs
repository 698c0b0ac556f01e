//! update-gold command handler

use std::path::Path;

use anyhow::Result;

use goldrun::config::Config;
use goldrun::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::report::render_update_gold_summary;

pub fn cmd_update_gold(project: &Path, config: &Config, ui: &UiContext) -> Result<i32> {
    let use_case = factory::create_update_gold_use_case(project, config);
    let result = use_case.execute()?;

    print!("{}", render_update_gold_summary(&result, ui.color));

    Ok(if result.is_success() { 0 } else { 1 })
}

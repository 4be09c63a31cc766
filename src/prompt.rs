use crate::errors::GrabError;
use crate::templates::{template_names, NO_TEMPLATE};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Reads one line from stdin. An empty submission (or EOF) is `None`.
pub async fn prompt_line(prompt: &str) -> Result<Option<String>, GrabError> {
    let mut stdout = io::stdout();
    stdout.write_all(format!("{}: ", prompt).as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    let read = BufReader::new(io::stdin()).read_line(&mut line).await?;
    let trimmed = line.trim();
    if read == 0 || trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_owned()))
    }
}

/// Prompts for a comma-separated list, split and trimmed. An empty
/// submission means "no value", not an empty list.
pub async fn prompt_for_list(prompt: &str) -> Result<Option<Vec<String>>, GrabError> {
    let input = prompt_line(prompt).await?;
    Ok(input.map(|line| {
        line.split(',')
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect()
    }))
}

/// Prompts for a template name from the built-in registry, or "none".
pub async fn prompt_template_choice() -> Result<Option<String>, GrabError> {
    let mut choices = template_names();
    choices.push(NO_TEMPLATE);
    prompt_line(&format!("Choose a template ({})", choices.join(", "))).await
}

//! Read-eval-render loop over a line stream

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::{
    config::OutputFormat,
    render::Renderer,
    state::TimersScope,
};
use super::{handlers::handle_line, responses::ReplyStatus};

/// Output options for a console session
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub format: OutputFormat,
    /// Only render on `status`
    pub quiet: bool,
}

/// Run commands from `input` against the store mounted in `scope` until EOF
/// or `quit`.
///
/// Fails with [`crate::StoreError::MissingContext`] if `scope` is not mounted.
pub async fn run_session<R, W>(
    scope: &TimersScope,
    input: R,
    out: &mut W,
    options: SessionOptions,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut ctx = scope.context()?;
    let mut renderer = Renderer::new(ctx.store(), options.format);
    let mut lines = input.lines();

    info!("Console session started");
    while let Some(line) = lines.next_line().await? {
        let Some(reply) = handle_line(&mut ctx, &line) else {
            continue;
        };

        if !reply.message.is_empty() {
            match (options.format, reply.status) {
                (OutputFormat::Json, _) => writeln!(out, "{}", reply.to_json()?)?,
                (OutputFormat::Text, ReplyStatus::Ok) => writeln!(out, "{}", reply.message)?,
                (OutputFormat::Text, ReplyStatus::Error) => {
                    writeln!(out, "error: {}", reply.message)?
                }
            }
        }

        if reply.show_state {
            renderer.render(out)?;
        } else if !options.quiet {
            renderer.render_if_changed(out)?;
        }
        out.flush()?;

        if reply.exit {
            debug!("Quit requested");
            break;
        }
    }

    info!("Console session ended");
    Ok(())
}

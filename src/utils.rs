use time::{macros::format_description, OffsetDateTime};
use tracing::Level;
use tracing_subscriber::fmt::format::{FmtSpan, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::FmtSubscriber;

struct Timer;
impl FormatTime for Timer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = local_now()
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(|_| std::fmt::Error)?;
        write!(w, "{}", now)
    }
}

/// Log into `./logs/<file_name>.log`. Keep the guard alive until exit, the
/// writer flushes on drop.
pub fn init_log(file_name: &str) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_name = file_name.to_owned() + ".log";
    let file_appender = tracing_appender::rolling::never("./logs", file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(non_blocking)
        .with_span_events(FmtSpan::CLOSE)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_timer(Timer)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn file_logger(name: &str) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let stamp = local_now().format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second]"
    ))?;
    let log_name = if name.is_empty() {
        format!("fuse_ops_chart_{stamp}")
    } else {
        format!("fuse_ops_chart_{name}_{stamp}")
    };
    init_log(&log_name)
}

pub fn stdout_logger() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_span_events(FmtSpan::CLOSE)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_timer(Timer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

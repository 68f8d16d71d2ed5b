//! Paced playback of a planned spin.

use roulette_core::{TimeError, TimeProvider};

use crate::picker::{Frame, Spin};

/// Whether playback should go on after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the next frame.
    Continue,
    /// Stop here; the frame just shown is the last one observed.
    Stop,
}

/// Receives frames as they are played.
pub trait FrameSink {
    /// Render `frame` and decide whether to keep going.
    fn frame(&mut self, frame: &Frame) -> Flow;
}

impl<F> FrameSink for F
where
    F: FnMut(&Frame) -> Flow,
{
    fn frame(&mut self, frame: &Frame) -> Flow {
        self(frame)
    }
}

/// How a playback ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackOutcome {
    /// Rotation of the last frame handed to the sink.
    pub last_angle: f64,
    /// Frames handed to the sink.
    pub frames_shown: usize,
    /// False when the sink stopped early.
    pub completed: bool,
}

/// Play `spin` frame by frame, sleeping the paced interval after each.
///
/// When the sink returns [`Flow::Stop`] playback ends at once, without the
/// trailing sleep, and the outcome carries the angle to pass to
/// [`Picker::interrupt_at`](crate::Picker::interrupt_at).
pub async fn play<T, S>(spin: &Spin, time: &T, sink: &mut S) -> Result<PlaybackOutcome, TimeError>
where
    T: TimeProvider,
    S: FrameSink + ?Sized,
{
    let mut outcome = PlaybackOutcome {
        last_angle: spin.start_angle,
        frames_shown: 0,
        completed: true,
    };

    for frame in spin.frames_with_highlight() {
        outcome.last_angle = frame.angle;
        outcome.frames_shown += 1;

        if sink.frame(&frame) == Flow::Stop {
            outcome.completed = false;
            tracing::debug!(
                drawn = spin.drawn,
                frame = frame.index,
                angle = frame.angle,
                "playback stopped by sink"
            );
            break;
        }
        time.sleep(frame.delay).await?;
    }

    Ok(outcome)
}

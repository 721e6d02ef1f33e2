use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::console::{
    BatchQueue, BatchStep, BrowseAccess, Console, EntryKind, EntryOutcome, NavState, PROMPT,
    Submission,
};
use crate::model::{DirectoryEntry, format_bytes, format_capacity};
use crate::remote::{Gateway, RemoteClient};

use super::input::Input;
use super::modal;

mod batch_runner;
mod browser;
mod event_loop;
mod lifecycle;
mod modal_output;
mod modal_types;
mod render;
mod runtime;
mod state;

pub(super) use self::modal_types::{Modal, ModalKind, PendingAction, TextInputAction};
pub(super) use self::runtime::run;
pub(super) use self::state::{App, Focus, PendingBatch};

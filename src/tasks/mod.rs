// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload tasks such as
//! archive fetching and parsing from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppTask`] requests into archive
//! operations and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! The worker owns the loaded archive; the UI only ever sees cloned lecture
//! lists, so filtering also runs here, against the worker's copy.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time to process, should be implemented as tasks. Other actions are likely
//! more suited to events.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Duration,
};

use anyhow::Result;
use log::info;

use crate::{
    archive::{self, ArchiveError, SheetSource},
    config::AppConfig,
    events::AppEvent,
    model::{Archive, filter::{LectureFilter, filter_lectures}},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Load the archive; `refresh` bypasses the fetch cache.
    LoadArchive { refresh: bool },

    Filter(LectureFilter),
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread owns the loaded archive and enters a blocking loop,
/// listening for incoming [`AppTask`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut archive: Option<Archive> = None;

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                archive: &mut archive,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    archive: &'a mut Option<Archive>,
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result
/// back through the application event channel.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadArchive { refresh } => load_archive(ctx, refresh),
        AppTask::Filter(filter) => filter_archive(ctx, filter),
    }
}

fn load_archive(ctx: &mut TaskContext, refresh: bool) -> Result<()> {
    ctx.event_tx.send(AppEvent::ArchiveLoading)?;

    let Some(source) = SheetSource::from_config(ctx.config) else {
        ctx.event_tx.send(AppEvent::ArchiveFailed(
            "no archive source configured; set sheet_id or sheet_url in the config".to_string(),
        ))?;
        return Ok(());
    };

    info!("loading archive from {:?} (refresh: {})", source, refresh);
    let max_age = Duration::from_secs(ctx.config.cache_max_age_secs);

    match archive::load_archive(&source, max_age, refresh) {
        Ok((archive, origin)) => {
            ctx.event_tx.send(AppEvent::ArchiveReady {
                lectures: archive.lectures.clone(),
                dropped: archive.dropped,
                origin,
            })?;
            *ctx.archive = Some(archive);
        }
        Err(ArchiveError::Empty { dropped }) => {
            *ctx.archive = None;
            ctx.event_tx.send(AppEvent::ArchiveEmpty { dropped })?;
        }
        Err(e) => {
            *ctx.archive = None;
            ctx.event_tx.send(AppEvent::ArchiveFailed(e.to_string()))?;
        }
    }

    Ok(())
}

fn filter_archive(ctx: &mut TaskContext, filter: LectureFilter) -> Result<()> {
    let Some(archive) = ctx.archive.as_ref() else {
        ctx.event_tx
            .send(AppEvent::Error("the archive is not loaded yet".to_string()))?;
        return Ok(());
    };

    let lectures = filter_lectures(&archive.lectures, &filter);
    ctx.event_tx
        .send(AppEvent::SearchResultsReady { filter, lectures })?;

    Ok(())
}

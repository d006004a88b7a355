// SPDX-FileCopyrightText: 2026 Braid Authors
// SPDX-License-Identifier: MIT

/// Intent-handler implementation used by `apply_intent`. Keeps `ops::mod`
/// focused on the public intent/outcome/error types and dispatch.
fn active_chat<'a>(
    store: &'a TimelineStore,
    session: &Session,
) -> Result<&'a Chat, ApplyError> {
    let chat_id = session.active_chat_id().ok_or(ApplyError::NoActiveChat)?;
    store.chat(chat_id).ok_or(ApplyError::NoActiveChat)
}

fn send_message(
    store: &mut TimelineStore,
    session: &mut Session,
    text: &str,
) -> Result<Outcome, ApplyError> {
    let chat_id = active_chat(store, session)?.chat_id();

    match session.cursor() {
        Cursor::Compose(selection) => {
            let actor_id = selection.actor_id.ok_or(ApplyError::NoActiveActor)?;
            let (moment_id, block_id) = store.create_moment(selection.moment_id, actor_id, text)?;
            store.add_moment_to_chat(chat_id, moment_id)?;
            let resolved_references = store.resolve_pending_references(block_id)?;

            session.set_cursor(Cursor::Compose(ComposeSelection {
                actor_id: Some(actor_id),
                moment_id: Some(moment_id),
            }));
            Ok(Outcome::MessageSent {
                moment_id,
                block_id,
                resolved_references,
            })
        }
        Cursor::Addressing {
            moment_index,
            actor_index,
            resume,
        } => {
            let (moment_id, actor_id) =
                address_coordinate(store, chat_id, moment_index, actor_index)?;

            let existing = store
                .block_for_actor(moment_id, actor_id)
                .map(|block| (block.block_id(), block.is_placeholder()));
            let block_id = match existing {
                // The placeholder-fill case: the cell was synthesized by an
                // earlier addressing and now receives its real text.
                Some((block_id, true)) => {
                    store.fill_block_text(block_id, text)?;
                    block_id
                }
                Some((_, false)) => {
                    return Err(ApplyError::Store(StoreError::DuplicateActorInMoment {
                        moment_id,
                        actor_id,
                    }));
                }
                None => store.append_block_to_moment(moment_id, actor_id, text)?,
            };
            let resolved_references = store.resolve_pending_references(block_id)?;

            session.set_cursor(Cursor::Compose(resume));
            session.set_addressing_input(false);
            Ok(Outcome::AddressedBlockWritten {
                moment_id,
                block_id,
                resolved_references,
            })
        }
    }
}

fn cycle_axis(store: &TimelineStore, session: &mut Session) -> Result<Outcome, ApplyError> {
    let chat = active_chat(store, session)?;

    match session.cursor() {
        Cursor::Compose(selection) => match session.axis() {
            Axis::Actor => {
                let actors = chat.actor_ids();
                if actors.is_empty() {
                    return Ok(Outcome::Noop);
                }
                // Forward-circular through the chat's actor list.
                let next = match selection.actor_id.and_then(|id| chat.actor_index_of(id)) {
                    Some(index) => actors[(index + 1) % actors.len()],
                    None => actors[0],
                };
                session.set_cursor(Cursor::Compose(ComposeSelection {
                    actor_id: Some(next),
                    ..selection
                }));
                Ok(Outcome::CursorMoved)
            }
            Axis::Moment => {
                let moments = chat.moment_ids();
                if moments.is_empty() {
                    return Ok(Outcome::Noop);
                }
                // Backward-circular: scanning moves toward earlier moments.
                let next = match selection.moment_id.and_then(|id| chat.moment_index_of(id)) {
                    Some(index) => moments[(index + moments.len() - 1) % moments.len()],
                    None => moments[moments.len() - 1],
                };
                session.set_cursor(Cursor::Compose(ComposeSelection {
                    moment_id: Some(next),
                    ..selection
                }));
                Ok(Outcome::CursorMoved)
            }
        },
        Cursor::Addressing {
            moment_index,
            actor_index,
            resume,
        } => {
            let (moment_index, actor_index) = match session.axis() {
                Axis::Actor => {
                    let count = chat.actor_ids().len();
                    if count == 0 {
                        return Ok(Outcome::Noop);
                    }
                    (moment_index, (actor_index + 1) % count)
                }
                Axis::Moment => {
                    let count = chat.moment_ids().len();
                    if count == 0 {
                        return Ok(Outcome::Noop);
                    }
                    ((moment_index + count - 1) % count, actor_index)
                }
            };
            session.set_cursor(Cursor::Addressing {
                moment_index,
                actor_index,
                resume,
            });
            Ok(Outcome::CursorMoved)
        }
    }
}

fn toggle_axis(session: &mut Session) -> Outcome {
    let axis = session.axis().flipped();
    session.set_axis(axis);
    Outcome::AxisSet { axis }
}

fn toggle_addressing(
    store: &TimelineStore,
    session: &mut Session,
) -> Result<Outcome, ApplyError> {
    let chat = active_chat(store, session)?;

    match session.cursor() {
        Cursor::Compose(selection) => {
            // A 2-D coordinate needs both sequences to be non-empty.
            if chat.actor_ids().is_empty() || chat.moment_ids().is_empty() {
                return Ok(Outcome::Noop);
            }
            let moment_index = selection
                .moment_id
                .and_then(|id| chat.moment_index_of(id))
                .unwrap_or(0);
            let actor_index = selection
                .actor_id
                .and_then(|id| chat.actor_index_of(id))
                .unwrap_or(0);
            session.set_cursor(Cursor::Addressing {
                moment_index,
                actor_index,
                resume: selection,
            });
            session.set_addressing_input(true);
            Ok(Outcome::AddressingEntered)
        }
        Cursor::Addressing { resume, .. } => {
            session.set_cursor(Cursor::Compose(resume));
            session.set_addressing_input(false);
            Ok(Outcome::AddressingExited)
        }
    }
}

fn commit_address(
    store: &mut TimelineStore,
    session: &mut Session,
) -> Result<Outcome, ApplyError> {
    let Cursor::Addressing {
        moment_index,
        actor_index,
        resume,
    } = session.cursor()
    else {
        return Err(ApplyError::NotAddressing);
    };
    let chat_id = active_chat(store, session)?.chat_id();

    let (cited_block_id, placeholder_created) =
        resolve_address(store, chat_id, moment_index, actor_index)?;
    store.open_reference(cited_block_id)?;
    let token = address_token(store, chat_id, moment_index, actor_index)?;

    session.set_cursor(Cursor::Compose(resume));
    session.set_addressing_input(false);
    session.set_axis(Axis::Actor);
    Ok(Outcome::AddressCommitted {
        cited_block_id,
        token,
        placeholder_created,
    })
}

/// The reference resolver: returns the block at a (moment, actor) coordinate
/// of the chat, synthesizing a placeholder block if nobody has spoken there
/// yet. Addressing therefore always yields a concrete block to cite.
///
/// The second value reports whether a placeholder was created.
pub fn resolve_address(
    store: &mut TimelineStore,
    chat_id: ChatId,
    moment_index: usize,
    actor_index: usize,
) -> Result<(BlockId, bool), ApplyError> {
    let (moment_id, actor_id) = address_coordinate(store, chat_id, moment_index, actor_index)?;

    if let Some(block) = store.block_for_actor(moment_id, actor_id) {
        return Ok((block.block_id(), false));
    }
    let block_id = store.append_placeholder_block(moment_id, actor_id)?;
    Ok((block_id, true))
}

fn address_coordinate(
    store: &TimelineStore,
    chat_id: ChatId,
    moment_index: usize,
    actor_index: usize,
) -> Result<(MomentId, ActorId), ApplyError> {
    let chat = store
        .chat(chat_id)
        .ok_or(ApplyError::NoActiveChat)?;
    let moment_count = chat.moment_ids().len();
    let actor_count = chat.actor_ids().len();
    match (
        chat.moment_ids().get(moment_index),
        chat.actor_ids().get(actor_index),
    ) {
        (Some(&moment_id), Some(&actor_id)) => Ok((moment_id, actor_id)),
        _ => Err(ApplyError::InvalidAddress {
            moment_index,
            actor_index,
            moment_count,
            actor_count,
        }),
    }
}

/// The inline citation marker inserted into the composing input,
/// `"@<label>[<actor_index>] "`.
fn address_token(
    store: &TimelineStore,
    chat_id: ChatId,
    moment_index: usize,
    actor_index: usize,
) -> Result<SmolStr, ApplyError> {
    let (moment_id, _) = address_coordinate(store, chat_id, moment_index, actor_index)?;
    let label = moment_label(store, moment_id)?;

    let mut index_buf = itoa::Buffer::new();
    let mut token = String::with_capacity(label.len() + 8);
    token.push('@');
    token.push_str(&label);
    token.push('[');
    token.push_str(index_buf.format(actor_index));
    token.push_str("] ");
    Ok(SmolStr::from(token))
}

fn select_actor(
    store: &TimelineStore,
    session: &mut Session,
    actor_id: ActorId,
) -> Result<Outcome, ApplyError> {
    store
        .actor(actor_id)
        .ok_or(StoreError::UnknownEntity {
            kind: EntityKind::Actor,
            id: actor_id.raw(),
        })?;

    let mut selection = session.compose_selection();
    // Selecting the active actor clears the selection.
    selection.actor_id = if selection.actor_id == Some(actor_id) {
        None
    } else {
        Some(actor_id)
    };
    set_compose_selection(session, selection);
    Ok(Outcome::ActorSelected {
        actor_id: selection.actor_id,
    })
}

fn select_moment(
    store: &TimelineStore,
    session: &mut Session,
    moment_id: MomentId,
) -> Result<Outcome, ApplyError> {
    store
        .moment(moment_id)
        .ok_or(StoreError::UnknownEntity {
            kind: EntityKind::Moment,
            id: moment_id.raw(),
        })?;

    let mut selection = session.compose_selection();
    selection.moment_id = if selection.moment_id == Some(moment_id) {
        None
    } else {
        Some(moment_id)
    };
    set_compose_selection(session, selection);
    Ok(Outcome::MomentSelected {
        moment_id: selection.moment_id,
    })
}

/// Writes a compose selection wherever it currently lives: live in compose
/// mode, or parked behind an addressing excursion.
fn set_compose_selection(session: &mut Session, selection: ComposeSelection) {
    let cursor = match session.cursor() {
        Cursor::Compose(_) => Cursor::Compose(selection),
        Cursor::Addressing {
            moment_index,
            actor_index,
            ..
        } => Cursor::Addressing {
            moment_index,
            actor_index,
            resume: selection,
        },
    };
    session.set_cursor(cursor);
}

fn create_actor(
    store: &mut TimelineStore,
    session: &mut Session,
    name: &str,
) -> Result<Outcome, ApplyError> {
    let chat_id = active_chat(store, session)?.chat_id();

    let actor_id = store.add_actor(name);
    store.add_actor_to_chat(chat_id, actor_id)?;

    let mut selection = session.compose_selection();
    selection.actor_id = Some(actor_id);
    set_compose_selection(session, selection);
    Ok(Outcome::ActorCreated { actor_id })
}

fn create_chat(
    store: &mut TimelineStore,
    session: &mut Session,
    name: &str,
) -> Result<Outcome, ApplyError> {
    let chat_id = store.create_chat(name, None)?;
    session.set_active_chat_id(Some(chat_id));
    session.reset_cursor();
    Ok(Outcome::ChatCreated { chat_id })
}

fn select_chat(
    store: &TimelineStore,
    session: &mut Session,
    chat_id: ChatId,
) -> Result<Outcome, ApplyError> {
    store
        .chat(chat_id)
        .ok_or(StoreError::UnknownEntity {
            kind: EntityKind::Chat,
            id: chat_id.raw(),
        })?;

    // Selecting the active chat deselects it; compose selections never carry
    // across chats.
    let next = if session.active_chat_id() == Some(chat_id) {
        None
    } else {
        Some(chat_id)
    };
    session.set_active_chat_id(next);
    session.reset_cursor();
    Ok(Outcome::ChatSelected { chat_id: next })
}

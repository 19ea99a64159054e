mod test_new_message_reloads;
mod test_other_frames_are_ignored;

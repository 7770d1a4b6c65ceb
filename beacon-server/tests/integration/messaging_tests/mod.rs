mod test_forged_targets_dropped;

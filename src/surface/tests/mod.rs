mod test_placement;

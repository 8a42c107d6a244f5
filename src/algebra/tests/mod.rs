mod compressed;
